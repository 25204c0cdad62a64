//! Bonus multiplier overlays.
//!
//! - `None`: every hand pays at 1x, no surcharge.
//! - `UltimateX`: one extra bet per round; each replicated hand's multiplier
//!   this round comes from the label it made last round.
//! - `SuperTimesPay`: a 20% surcharge; one round in fifteen spins a weighted
//!   list and the result applies to every hand of the round.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::classify::Label;
use crate::deck::{shuffled_copy, ShuffleSource};
use crate::errors::GameError;

pub const SUPER_TIMES_SURCHARGE: f64 = 0.2;
/// One-in-N chance of a multiplier spin each round.
pub const SUPER_TIMES_ODDS: u32 = 15;
pub const SUPER_TIMES_MULTIPLIERS: [u32; 10] = [2, 2, 2, 2, 2, 3, 4, 5, 8, 10];

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MultiplierMode {
    #[default]
    None,
    UltimateX,
    SuperTimesPay,
}

impl MultiplierMode {
    pub fn code(self) -> &'static str {
        match self {
            MultiplierMode::None => "none",
            MultiplierMode::UltimateX => "ultx",
            MultiplierMode::SuperTimesPay => "supt",
        }
    }

    /// Extra cost taken before the deal, on top of `bet * hand_count`.
    pub fn surcharge(self, bet: f64, hand_count: usize) -> f64 {
        let base = bet * hand_count as f64;
        match self {
            MultiplierMode::None => 0.0,
            MultiplierMode::UltimateX => base,
            MultiplierMode::SuperTimesPay => base * SUPER_TIMES_SURCHARGE,
        }
    }

    /// Multipliers for this round's replicated hands.
    ///
    /// `previous` holds each hand's label from the last completed round and is
    /// only consulted in Ultimate-X mode.
    pub fn round_multipliers(
        self,
        previous: &[Option<Label>],
        hand_count: usize,
        src: &mut dyn ShuffleSource,
    ) -> Vec<u32> {
        match self {
            MultiplierMode::None => vec![1; hand_count],
            MultiplierMode::UltimateX => (0..hand_count)
                .map(|i| ultimate_x_multiplier(previous.get(i).copied().flatten()))
                .collect(),
            MultiplierMode::SuperTimesPay => vec![super_times_pay_roll(src); hand_count],
        }
    }
}

impl fmt::Display for MultiplierMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MultiplierMode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(MultiplierMode::None),
            "ultx" | "ultimate-x" => Ok(MultiplierMode::UltimateX),
            "supt" | "super-times-pay" => Ok(MultiplierMode::SuperTimesPay),
            other => Err(GameError::UnknownMultiplierMode(other.to_string())),
        }
    }
}

/// Carry-forward multiplier earned by `label` for the next round.
pub fn ultimate_x_multiplier(label: Option<Label>) -> u32 {
    match label {
        Some(Label::StraightFlush) => 50,
        Some(Label::FullHouse) => 12,
        Some(Label::Flush) => 10,
        Some(Label::Straight) => 8,
        Some(Label::ThreeOfAKind) => 4,
        Some(Label::TwoPair) => 3,
        Some(Label::RoyalFlush) | Some(Label::JacksOrBetter) => 2,
        Some(l) if l.is_quad() => 2,
        _ => 1,
    }
}

/// Rolls the one-in-fifteen trigger and, when it fires, spins a shuffled copy
/// of the weighted list and takes its last entry.
pub fn super_times_pay_roll(src: &mut dyn ShuffleSource) -> u32 {
    if src.below(SUPER_TIMES_ODDS) != SUPER_TIMES_ODDS - 1 {
        return 1;
    }
    shuffled_copy(src, &SUPER_TIMES_MULTIPLIERS)
        .last()
        .copied()
        .unwrap_or(1)
}
