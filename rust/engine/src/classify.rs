//! Rule-based hand classification.
//!
//! Each variant owns an ordered list of `(predicate, label)` rules and the
//! first predicate that holds decides the label. The predicates overlap (a
//! full house also has two zero deltas, an Ace quad is also a plain quad), so
//! the order of a variant's list is what encodes payout precedence.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hand::{EncodedHand, STRAIGHT};
use crate::paytable::Variant;

/// Hand category driving payout. Declaration order is payout order, which is
/// also the order histograms are reported in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "RF")]
    RoyalFlush,
    #[serde(rename = "SF")]
    StraightFlush,
    /// Four Aces with a 2, 3 or 4 kicker
    #[serde(rename = "4KA_2_4")]
    FourAcesLowKicker,
    /// Four 2s, 3s or 4s with an Ace kicker
    #[serde(rename = "4K2_4_A")]
    FourLowAceKicker,
    #[serde(rename = "4KA")]
    FourAces,
    #[serde(rename = "4K2_4")]
    FourLow,
    #[serde(rename = "4K")]
    FourOfAKind,
    #[serde(rename = "FH")]
    FullHouse,
    #[serde(rename = "F")]
    Flush,
    #[serde(rename = "S")]
    Straight,
    #[serde(rename = "3K")]
    ThreeOfAKind,
    #[serde(rename = "2P")]
    TwoPair,
    #[serde(rename = "JoB")]
    JacksOrBetter,
}

impl Label {
    pub fn code(self) -> &'static str {
        match self {
            Label::RoyalFlush => "RF",
            Label::StraightFlush => "SF",
            Label::FourAcesLowKicker => "4KA_2_4",
            Label::FourLowAceKicker => "4K2_4_A",
            Label::FourAces => "4KA",
            Label::FourLow => "4K2_4",
            Label::FourOfAKind => "4K",
            Label::FullHouse => "FH",
            Label::Flush => "F",
            Label::Straight => "S",
            Label::ThreeOfAKind => "3K",
            Label::TwoPair => "2P",
            Label::JacksOrBetter => "JoB",
        }
    }

    pub fn is_quad(self) -> bool {
        matches!(
            self,
            Label::FourAcesLowKicker
                | Label::FourLowAceKicker
                | Label::FourAces
                | Label::FourLow
                | Label::FourOfAKind
        )
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub type Predicate = fn(&EncodedHand) -> bool;

pub fn is_royal_flush(h: &EncodedHand) -> bool {
    h.is_flush() && h.value_deltas == STRAIGHT && h.top_value() == 14
}

pub fn is_straight_flush(h: &EncodedHand) -> bool {
    h.is_flush() && h.is_straight()
}

pub fn is_quad(h: &EncodedHand) -> bool {
    h.is_quad()
}

pub fn is_quad_aces(h: &EncodedHand) -> bool {
    h.is_quad() && h.quad_value() == 14
}

pub fn is_quad_low(h: &EncodedHand) -> bool {
    h.is_quad() && (2..=4).contains(&h.quad_value())
}

pub fn is_quad_aces_low_kicker(h: &EncodedHand) -> bool {
    is_quad_aces(h) && (2..=4).contains(&h.quad_kicker())
}

pub fn is_quad_low_ace_kicker(h: &EncodedHand) -> bool {
    is_quad_low(h) && h.quad_kicker() == 14
}

pub fn is_full_house(h: &EncodedHand) -> bool {
    h.is_full_house()
}

pub fn is_flush(h: &EncodedHand) -> bool {
    h.is_flush()
}

pub fn is_straight(h: &EncodedHand) -> bool {
    h.is_straight()
}

pub fn is_three_of_a_kind(h: &EncodedHand) -> bool {
    h.trips_start().is_some()
}

pub fn is_two_pair(h: &EncodedHand) -> bool {
    h.zero_value_deltas() == 2
}

pub fn is_jacks_or_better(h: &EncodedHand) -> bool {
    if h.zero_value_deltas() != 1 {
        return false;
    }
    h.value_deltas
        .iter()
        .position(|&d| d == 0)
        .is_some_and(|i| h.sorted_values[i] > 10)
}

pub const JACKS_OR_BETTER_RULES: &[(Predicate, Label)] = &[
    (is_royal_flush, Label::RoyalFlush),
    (is_straight_flush, Label::StraightFlush),
    (is_quad, Label::FourOfAKind),
    (is_full_house, Label::FullHouse),
    (is_flush, Label::Flush),
    (is_straight, Label::Straight),
    (is_three_of_a_kind, Label::ThreeOfAKind),
    (is_two_pair, Label::TwoPair),
    (is_jacks_or_better, Label::JacksOrBetter),
];

pub const DOUBLE_BONUS_RULES: &[(Predicate, Label)] = &[
    (is_royal_flush, Label::RoyalFlush),
    (is_quad_aces, Label::FourAces),
    (is_quad_low, Label::FourLow),
    (is_quad, Label::FourOfAKind),
    (is_straight_flush, Label::StraightFlush),
    (is_full_house, Label::FullHouse),
    (is_flush, Label::Flush),
    (is_straight, Label::Straight),
    (is_three_of_a_kind, Label::ThreeOfAKind),
    (is_two_pair, Label::TwoPair),
    (is_jacks_or_better, Label::JacksOrBetter),
];

pub const TRIPLE_DOUBLE_BONUS_RULES: &[(Predicate, Label)] = &[
    (is_royal_flush, Label::RoyalFlush),
    (is_quad_aces_low_kicker, Label::FourAcesLowKicker),
    (is_quad_low_ace_kicker, Label::FourLowAceKicker),
    (is_quad_aces, Label::FourAces),
    (is_quad_low, Label::FourLow),
    (is_quad, Label::FourOfAKind),
    (is_straight_flush, Label::StraightFlush),
    (is_full_house, Label::FullHouse),
    (is_flush, Label::Flush),
    (is_straight, Label::Straight),
    (is_three_of_a_kind, Label::ThreeOfAKind),
    (is_two_pair, Label::TwoPair),
    (is_jacks_or_better, Label::JacksOrBetter),
];

/// First matching label of `variant`'s cascade, or `None` for a losing hand.
pub fn classify(variant: Variant, hand: &EncodedHand) -> Option<Label> {
    variant
        .rules()
        .iter()
        .find(|(matches, _)| matches(hand))
        .map(|&(_, label)| label)
}
