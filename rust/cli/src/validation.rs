//! Parsing of the hold prompt in interactive play.

use vidpoker_ai::HoldAlgorithm;
use vidpoker_engine::hold::HoldMask;

/// Outcome of reading one line at the hold prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Hold(HoldMask),
    /// User entered quit command (q or quit)
    Quit,
    /// Let an automatic algorithm pick this round's hold
    Delegate(HoldAlgorithm),
    Invalid(String),
}

/// Parses the hold prompt (case-insensitive).
///
/// - `q` / `quit` ends the session
/// - `a` / `all` holds every card, `n` / `none` / empty input holds nothing
/// - `r` asks the random provider, `s1` asks strategy1
/// - digits 1-5, optionally separated by spaces or commas, hold those positions
///
/// ```rust
/// # use vidpoker_cli::validation::{parse_hold_input, ParseResult};
/// use vidpoker_engine::hold::HoldMask;
///
/// assert_eq!(
///     parse_hold_input("1 3, 5"),
///     ParseResult::Hold(HoldMask::from_positions([0, 2, 4]))
/// );
/// assert_eq!(parse_hold_input(""), ParseResult::Hold(HoldMask::NONE));
/// assert_eq!(parse_hold_input("Q"), ParseResult::Quit);
/// ```
pub fn parse_hold_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "q" | "quit" => ParseResult::Quit,
        "a" | "all" => ParseResult::Hold(HoldMask::ALL),
        "" | "n" | "none" => ParseResult::Hold(HoldMask::NONE),
        "r" | "random" => ParseResult::Delegate(HoldAlgorithm::Random),
        "s1" => ParseResult::Delegate(HoldAlgorithm::Strategy1),
        other => {
            let digits: String = other
                .chars()
                .filter(|c| !c.is_whitespace() && *c != ',')
                .collect();
            match digits.parse::<HoldMask>() {
                Ok(mask) => ParseResult::Hold(mask),
                Err(_) => ParseResult::Invalid(format!(
                    "Unrecognized hold '{}': enter positions 1-5, a, n, r, s1 or q",
                    other
                )),
            }
        }
    }
}
