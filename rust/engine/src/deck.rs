use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// Source of randomness consumed by the round controller.
///
/// The core never draws random numbers on its own; every shuffle and every
/// bonus roll goes through this seam so tests can script deals and runs can be
/// reproduced by seed.
pub trait ShuffleSource {
    /// Permute `cards` in place.
    fn shuffle_cards(&mut self, cards: &mut [Card]);

    /// Uniform integer in `0..n`. `n` is always at least 1.
    fn below(&mut self, n: u32) -> u32;
}

/// ChaCha20-backed shuffle service, reproducible from a `u64` seed.
#[derive(Debug, Clone)]
pub struct SeededShuffle {
    rng: ChaCha20Rng,
}

impl SeededShuffle {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl ShuffleSource for SeededShuffle {
    fn shuffle_cards(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }

    fn below(&mut self, n: u32) -> u32 {
        self.rng.random_range(0..n.max(1))
    }
}

/// Returns a shuffled copy of `items`, leaving the source table untouched.
pub fn shuffled_copy<T: Copy>(src: &mut dyn ShuffleSource, items: &[T]) -> Vec<T> {
    let mut v = items.to_vec();
    for i in (1..v.len()).rev() {
        let j = src.below(i as u32 + 1) as usize;
        v.swap(i, j);
    }
    v
}

/// One shuffled 52-card ordering with a deal cursor.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    /// Unshuffled deck in table order.
    pub fn ordered() -> Self {
        Self {
            cards: full_deck(),
            position: 0,
        }
    }

    pub fn shuffled(src: &mut dyn ShuffleSource) -> Self {
        let mut deck = Self::ordered();
        src.shuffle_cards(&mut deck.cards);
        deck
    }

    /// Deals the next five cards. A fresh deck always has them.
    pub fn deal_hand(&mut self) -> Option<[Card; 5]> {
        let start = self.position;
        let hand: [Card; 5] = self.cards.get(start..start + 5)?.try_into().ok()?;
        self.position += 5;
        Some(hand)
    }

    /// Cards not dealt yet, in deck order.
    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.position..]
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
