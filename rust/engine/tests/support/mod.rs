#![allow(dead_code)]

use std::collections::VecDeque;

use vidpoker_engine::cards::{parse_hand, Card};
use vidpoker_engine::deck::ShuffleSource;
use vidpoker_engine::hand::EncodedHand;
use vidpoker_engine::hold::{HoldDecision, HoldMask, HoldProvider};

/// Shuffle double: each shuffle moves the next scripted cards to the front
/// (in script order) and keeps everything else in its current order.
#[derive(Debug, Default)]
pub struct ScriptedShuffle {
    fronts: VecDeque<Vec<Card>>,
    fallback: Vec<Card>,
    rolls: VecDeque<u32>,
}

impl ScriptedShuffle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue cards for the next unscripted shuffle call.
    pub fn then(mut self, cards: &str) -> Self {
        self.fronts.push_back(cards_of(cards));
        self
    }

    /// Front used once the queue is empty.
    pub fn otherwise(mut self, cards: &str) -> Self {
        self.fallback = cards_of(cards);
        self
    }

    pub fn roll(mut self, value: u32) -> Self {
        self.rolls.push_back(value);
        self
    }
}

impl ShuffleSource for ScriptedShuffle {
    fn shuffle_cards(&mut self, cards: &mut [Card]) {
        let front = self
            .fronts
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        let arranged: Vec<Card> = front
            .iter()
            .copied()
            .filter(|c| cards.contains(c))
            .chain(cards.iter().copied().filter(|c| !front.contains(c)))
            .collect();
        cards.copy_from_slice(&arranged);
    }

    fn below(&mut self, n: u32) -> u32 {
        self.rolls.pop_front().unwrap_or(0).min(n - 1)
    }
}

pub fn cards_of(s: &str) -> Vec<Card> {
    s.split_whitespace()
        .map(|t| t.parse().expect("valid card"))
        .collect()
}

pub fn hand(s: &str) -> [Card; 5] {
    parse_hand(s).expect("valid hand")
}

/// Replays scripted decisions, then keeps everything.
#[derive(Debug, Default)]
pub struct ScriptedHolds(pub VecDeque<HoldDecision>);

impl ScriptedHolds {
    pub fn of(decisions: &[HoldDecision]) -> Self {
        Self(decisions.iter().copied().collect())
    }
}

impl HoldProvider for ScriptedHolds {
    fn decide(&mut self, _hand: &EncodedHand) -> HoldDecision {
        self.0
            .pop_front()
            .unwrap_or(HoldDecision::Hold(HoldMask::ALL))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

pub const ROYAL: &str = "Ts Js Qs Ks As";
pub const NOTHING: &str = "2c 4d 7h 9s Jc";
pub const TWO_PAIR: &str = "3c 3d 8h 8s Kc";
