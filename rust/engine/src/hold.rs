use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::hand::EncodedHand;

/// Set of card positions (0-based internally, 1-based when printed) kept
/// across the draw.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
pub struct HoldMask(u8);

impl HoldMask {
    pub const NONE: HoldMask = HoldMask(0);
    pub const ALL: HoldMask = HoldMask(0b1_1111);

    pub fn from_positions<I: IntoIterator<Item = usize>>(positions: I) -> Self {
        let mut bits = 0u8;
        for p in positions.into_iter().filter(|&p| p < 5) {
            bits |= 1 << p;
        }
        HoldMask(bits)
    }

    pub fn holds(self, position: usize) -> bool {
        position < 5 && self.0 & (1 << position) != 0
    }

    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// 0-based held positions in ascending order.
    pub fn positions(self) -> impl Iterator<Item = usize> {
        (0..5).filter(move |&p| self.holds(p))
    }
}

impl fmt::Display for HoldMask {
    /// 1-based positions, e.g. `"134"`; empty when nothing is held.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in self.positions() {
            write!(f, "{}", p + 1)?;
        }
        Ok(())
    }
}

impl FromStr for HoldMask {
    type Err = GameError;

    /// Parses 1-based digits such as `"1245"`. Repeats are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let positions = s
            .trim()
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d @ 1..=5) => Ok(d as usize - 1),
                _ => Err(GameError::InvalidConfig(format!(
                    "hold positions must be digits 1-5, got {s:?}"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(HoldMask::from_positions(positions))
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HoldDecision {
    Hold(HoldMask),
    /// Ends the whole session, not just the round.
    Quit,
}

/// Capability that decides which dealt cards to keep.
///
/// Invoked once per round with the encoded initial hand; every replicated
/// hand holds the same positions.
pub trait HoldProvider {
    fn decide(&mut self, hand: &EncodedHand) -> HoldDecision;

    fn name(&self) -> &str;
}
