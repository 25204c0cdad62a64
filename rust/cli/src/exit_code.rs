//! Process exit codes.

pub const SUCCESS: i32 = 0;

/// Bad arguments, bad configuration, engine rejection or I/O failure.
pub const ERROR: i32 = 2;

/// Interrupted at the prompt (Ctrl+C).
pub const INTERRUPTED: i32 = 130;
