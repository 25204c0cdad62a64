//! Five-card hand encoding.
//!
//! The classifier and the hold strategy never look at raw cards. They work on
//! sorted rank values, independently sorted suit categories, and the
//! adjacent differences ("deltas") of both sequences.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Value deltas of five consecutive ranks.
pub const STRAIGHT: [u8; 4] = [1, 1, 1, 1];
/// Value deltas of A-2-3-4-5: the Ace sorts last as 14, leaving a gap of 9.
pub const WHEEL_STRAIGHT: [u8; 4] = [1, 1, 1, 9];
/// Category deltas of five cards of one suit.
pub const FLUSH: [u8; 4] = [0, 0, 0, 0];
pub const FOUR_TO_STRAIGHT: [u8; 3] = [1, 1, 1];
pub const FOUR_TO_WHEEL: [u8; 3] = [1, 1, 9];
pub const FOUR_TO_FLUSH: [u8; 3] = [0, 0, 0];
pub const THREE_TO_FLUSH: [u8; 2] = [0, 0];
/// Lowest and highest starting value of a three-rank run that counts as a
/// three-to-a-royal draw (runs 2-3-4 through J-Q-K).
pub const THREE_TO_ROYAL_STARTS: std::ops::RangeInclusive<u8> = 2..=11;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EncodedHand {
    /// Cards ordered by value, ties broken by suit category. Hold positions
    /// refer to this order.
    pub cards: [Card; 5],
    pub sorted_values: [u8; 5],
    /// Sorted on their own; entry `i` is not necessarily the suit of `cards[i]`.
    pub sorted_categories: [u8; 5],
    pub value_deltas: [u8; 4],
    pub category_deltas: [u8; 4],
}

pub fn encode(cards: [Card; 5]) -> EncodedHand {
    let mut cards = cards;
    cards.sort_unstable_by_key(|c| (c.value(), c.category()));

    let sorted_values = cards.map(|c| c.value());
    let mut sorted_categories = cards.map(|c| c.category());
    sorted_categories.sort_unstable();

    EncodedHand {
        cards,
        sorted_values,
        sorted_categories,
        value_deltas: deltas(&sorted_values),
        category_deltas: deltas(&sorted_categories),
    }
}

fn deltas(sorted: &[u8; 5]) -> [u8; 4] {
    [
        sorted[1] - sorted[0],
        sorted[2] - sorted[1],
        sorted[3] - sorted[2],
        sorted[4] - sorted[3],
    ]
}

impl EncodedHand {
    pub fn zero_value_deltas(&self) -> usize {
        self.value_deltas.iter().filter(|&&d| d == 0).count()
    }

    pub fn top_value(&self) -> u8 {
        self.sorted_values[4]
    }

    /// Whether every listed value delta is zero.
    pub fn zeros_at(&self, at: &[usize]) -> bool {
        at.iter().all(|&i| self.value_deltas[i] == 0)
    }

    pub fn is_flush(&self) -> bool {
        self.category_deltas == FLUSH
    }

    pub fn is_straight(&self) -> bool {
        self.value_deltas == STRAIGHT || self.value_deltas == WHEEL_STRAIGHT
    }

    /// Exactly three zero value-deltas in one contiguous block.
    pub fn is_quad(&self) -> bool {
        self.zero_value_deltas() == 3 && (self.zeros_at(&[0, 1, 2]) || self.zeros_at(&[1, 2, 3]))
    }

    /// A three-block and a two-block.
    pub fn is_full_house(&self) -> bool {
        self.zero_value_deltas() == 3 && (self.zeros_at(&[0, 1, 3]) || self.zeros_at(&[0, 2, 3]))
    }

    /// Start index of the three matching cards, if the hand is exactly trips.
    pub fn trips_start(&self) -> Option<usize> {
        if self.zero_value_deltas() != 2 {
            return None;
        }
        (0..3).find(|&i| self.zeros_at(&[i, i + 1]))
    }

    /// Rank value of the repeated card in a quad.
    pub fn quad_value(&self) -> u8 {
        self.sorted_values[2]
    }

    /// The card that is not part of a quad.
    pub fn quad_kicker(&self) -> u8 {
        if self.sorted_values[0] == self.sorted_values[2] {
            self.sorted_values[4]
        } else {
            self.sorted_values[0]
        }
    }
}
