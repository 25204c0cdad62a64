//! Hold decisions typed at the terminal.

use std::io::{self, BufRead, Write};

use tracing::debug;
use vidpoker_ai::simple::RandomHold;
use vidpoker_ai::{HoldAlgorithm, strategy1};
use vidpoker_engine::hand::EncodedHand;
use vidpoker_engine::hold::{HoldDecision, HoldMask, HoldProvider};

use crate::error::CliError;
use crate::formatters::{format_hand, format_positions};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_hold_input};

/// Prompts on `out` and reads one line from `input` per round.
///
/// End of input quits the session. A failed read or write also quits; the
/// error is kept for [`HumanHold::take_error`] so the command can report it.
pub struct HumanHold<'a> {
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    random: RandomHold,
    error: Option<CliError>,
}

impl<'a> HumanHold<'a> {
    pub fn new(
        input: &'a mut dyn BufRead,
        out: &'a mut dyn Write,
        err: &'a mut dyn Write,
        seed: u64,
    ) -> Self {
        Self {
            input,
            out,
            err,
            random: RandomHold::new_with_seed(seed),
            error: None,
        }
    }

    /// Writer shared with the play loop so round output interleaves with
    /// the prompts.
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    pub fn take_error(&mut self) -> Option<CliError> {
        self.error.take()
    }

    fn prompt(&mut self, hand: &EncodedHand) -> io::Result<Option<String>> {
        writeln!(self.out, "{}", format_hand(&hand.cards))?;
        writeln!(self.out, "{}", format_positions(&hand.cards))?;
        write!(self.out, "Hold (1-5, a=all, n=none, r=random, s1, q=quit): ")?;
        self.out.flush()?;
        read_stdin_line(&mut *self.input)
    }

    fn delegate(&mut self, alg: HoldAlgorithm, hand: &EncodedHand) -> HoldMask {
        match alg {
            HoldAlgorithm::Strategy1 => strategy1(hand),
            HoldAlgorithm::Random => self.random.pick(),
            HoldAlgorithm::KeepAll => HoldMask::ALL,
            HoldAlgorithm::DiscardAll => HoldMask::NONE,
        }
    }

    fn ask(&mut self, hand: &EncodedHand) -> Result<HoldDecision, CliError> {
        loop {
            let Some(line) = self.prompt(hand)? else {
                writeln!(self.out)?;
                return Ok(HoldDecision::Quit);
            };
            match parse_hold_input(&line) {
                ParseResult::Hold(mask) => return Ok(HoldDecision::Hold(mask)),
                ParseResult::Quit => return Ok(HoldDecision::Quit),
                ParseResult::Delegate(alg) => {
                    let mask = self.delegate(alg, hand);
                    writeln!(self.out, "{} holds [{}]", alg, mask)?;
                    return Ok(HoldDecision::Hold(mask));
                }
                ParseResult::Invalid(msg) => ui::write_error(&mut *self.err, &msg)?,
            }
        }
    }
}

impl HoldProvider for HumanHold<'_> {
    fn decide(&mut self, hand: &EncodedHand) -> HoldDecision {
        match self.ask(hand) {
            Ok(decision) => decision,
            Err(e) => {
                debug!(error = %e, "hold prompt failed");
                self.error = Some(e);
                HoldDecision::Quit
            }
        }
    }

    fn name(&self) -> &str {
        "human"
    }
}
