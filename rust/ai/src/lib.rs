//! # vidpoker-ai: Automatic Hold Decisions
//!
//! Hold providers that plug into the engine's [`HoldProvider`] seam.
//!
//! ## Core Components
//!
//! - [`strategy`] - The deterministic `strategy1` heuristic
//! - [`simple`] - Random subset, hold-all and hold-none baselines
//! - [`create_hold_provider`] - Factory keyed by [`HoldAlgorithm`]
//!
//! ## Quick Start
//!
//! ```rust
//! use vidpoker_ai::{create_hold_provider, HoldAlgorithm};
//! use vidpoker_engine::cards::parse_hand;
//! use vidpoker_engine::hand::encode;
//! use vidpoker_engine::hold::HoldDecision;
//!
//! let mut provider = create_hold_provider(HoldAlgorithm::Strategy1, 42);
//! let hand = encode(parse_hand("Qh Qs 4d 7c 9s").unwrap());
//! match provider.decide(&hand) {
//!     HoldDecision::Hold(mask) => assert_eq!(mask.to_string(), "45"),
//!     HoldDecision::Quit => unreachable!(),
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use vidpoker_engine::errors::GameError;
use vidpoker_engine::hold::HoldProvider;

pub mod simple;
pub mod strategy;

pub use strategy::strategy1;

/// Selector for the automatic hold providers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum HoldAlgorithm {
    #[default]
    Strategy1,
    Random,
    KeepAll,
    DiscardAll,
}

impl HoldAlgorithm {
    pub fn code(self) -> &'static str {
        match self {
            HoldAlgorithm::Strategy1 => "s1",
            HoldAlgorithm::Random => "random",
            HoldAlgorithm::KeepAll => "keep",
            HoldAlgorithm::DiscardAll => "discard",
        }
    }
}

impl fmt::Display for HoldAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for HoldAlgorithm {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s1" | "strategy1" => Ok(HoldAlgorithm::Strategy1),
            "r" | "random" => Ok(HoldAlgorithm::Random),
            "k" | "keep" | "keep-all" => Ok(HoldAlgorithm::KeepAll),
            "d" | "discard" | "discard-all" => Ok(HoldAlgorithm::DiscardAll),
            other => Err(GameError::UnknownHoldAlgorithm(other.to_string())),
        }
    }
}

/// Builds a provider for `algorithm`. `seed` only matters for
/// [`HoldAlgorithm::Random`].
pub fn create_hold_provider(algorithm: HoldAlgorithm, seed: u64) -> Box<dyn HoldProvider + Send> {
    match algorithm {
        HoldAlgorithm::Strategy1 => Box::new(strategy::HeuristicStrategy::new()),
        HoldAlgorithm::Random => Box::new(simple::RandomHold::new_with_seed(seed)),
        HoldAlgorithm::KeepAll => Box::new(simple::KeepAll),
        HoldAlgorithm::DiscardAll => Box::new(simple::DiscardAll),
    }
}
