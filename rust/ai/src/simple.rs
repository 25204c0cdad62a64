//! Baseline hold providers used for comparison runs.

use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use vidpoker_engine::hand::EncodedHand;
use vidpoker_engine::hold::{HoldDecision, HoldMask, HoldProvider};

/// Holds a uniformly random non-empty subset: first picks how many cards
/// (1 to 5), then which positions.
#[derive(Debug, Clone)]
pub struct RandomHold {
    rng: ChaCha20Rng,
}

impl RandomHold {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn pick(&mut self) -> HoldMask {
        let count = self.rng.random_range(1..=5);
        HoldMask::from_positions(sample(&mut self.rng, 5, count))
    }
}

impl HoldProvider for RandomHold {
    fn decide(&mut self, _hand: &EncodedHand) -> HoldDecision {
        HoldDecision::Hold(self.pick())
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KeepAll;

impl HoldProvider for KeepAll {
    fn decide(&mut self, _hand: &EncodedHand) -> HoldDecision {
        HoldDecision::Hold(HoldMask::ALL)
    }

    fn name(&self) -> &str {
        "keep"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardAll;

impl HoldProvider for DiscardAll {
    fn decide(&mut self, _hand: &EncodedHand) -> HoldDecision {
        HoldDecision::Hold(HoldMask::NONE)
    }

    fn name(&self) -> &str {
        "discard"
    }
}
