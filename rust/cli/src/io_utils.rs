//! Prompt input and file helpers shared by the commands.

use std::io::{self, BufRead};
use std::path::Path;

/// Reads one trimmed line from `input`.
///
/// Returns `Ok(None)` on EOF. Read failures are passed through so that an
/// interrupted prompt can be told apart from a closed stream.
///
/// ```rust
/// use std::io::Cursor;
/// # use vidpoker_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  1 3 5 \n");
/// assert_eq!(read_stdin_line(&mut input).unwrap(), Some("1 3 5".to_string()));
/// assert_eq!(read_stdin_line(&mut input).unwrap(), None);
/// ```
pub fn read_stdin_line(input: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    match input.read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line.trim().to_string())),
    }
}

/// Reads a UTF-8 text file, dropping a leading byte order mark.
pub fn read_text(path: &Path) -> io::Result<String> {
    let mut content = std::fs::read_to_string(path)?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Creates the parent directory of `path` when it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
