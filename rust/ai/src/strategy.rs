//! Greedy "strategy1" hold heuristic.
//!
//! Works only on the encoded initial hand. Hold positions index
//! [`EncodedHand::cards`], i.e. the value-sorted order.

use vidpoker_engine::hand::{
    EncodedHand, FOUR_TO_FLUSH, FOUR_TO_STRAIGHT, FOUR_TO_WHEEL, THREE_TO_ROYAL_STARTS,
};
use vidpoker_engine::hold::{HoldDecision, HoldMask, HoldProvider};

use tracing::trace;

/// Rank values above this count as high cards (J, Q, K, A).
const HIGH_CARD_FLOOR: u8 = 10;

/// Decides which positions to keep. Tiers are tried in order and the first
/// one that applies wins.
pub fn strategy1(h: &EncodedHand) -> HoldMask {
    if h.is_flush() && h.is_straight() {
        return HoldMask::ALL;
    }
    if h.is_quad() || h.is_full_house() {
        return HoldMask::ALL;
    }
    if h.is_flush() || h.is_straight() {
        return HoldMask::ALL;
    }
    if let Some(start) = h.trips_start() {
        return HoldMask::from_positions(start..start + 3);
    }
    if h.zero_value_deltas() > 0 {
        return pairs(h);
    }
    four_to_flush(h)
        .or_else(|| four_to_straight(h))
        .or_else(|| three_to_royal(h))
        .unwrap_or_else(|| high_cards(h))
}

fn pairs(h: &EncodedHand) -> HoldMask {
    let positions = h
        .value_deltas
        .iter()
        .enumerate()
        .filter(|&(_, &d)| d == 0)
        .flat_map(|(i, _)| [i, i + 1]);
    HoldMask::from_positions(positions)
}

fn four_to_flush(h: &EncodedHand) -> Option<HoldMask> {
    let dc = &h.category_deltas;
    if dc[..3] != FOUR_TO_FLUSH && dc[1..] != FOUR_TO_FLUSH {
        return None;
    }
    // the four matching categories always cover index 1 of the sorted list
    let suit = h.sorted_categories[1];
    Some(HoldMask::from_positions(
        (0..5).filter(|&p| h.cards[p].category() == suit),
    ))
}

fn four_to_straight(h: &EncodedHand) -> Option<HoldMask> {
    let dv = &h.value_deltas;
    if dv[..3] == FOUR_TO_STRAIGHT {
        Some(HoldMask::from_positions(0..4))
    } else if dv[1..] == FOUR_TO_STRAIGHT || dv[1..] == FOUR_TO_WHEEL {
        Some(HoldMask::from_positions(1..5))
    } else {
        None
    }
}

fn three_to_royal(h: &EncodedHand) -> Option<HoldMask> {
    (0..3)
        .find(|&w| {
            let v = &h.sorted_values[w..w + 3];
            let run = THREE_TO_ROYAL_STARTS.contains(&v[0]) && v[1] == v[0] + 1 && v[2] == v[0] + 2;
            let suited = h.cards[w..w + 3]
                .iter()
                .all(|c| c.suit == h.cards[w].suit);
            run && suited
        })
        .map(|w| HoldMask::from_positions(w..w + 3))
}

fn high_cards(h: &EncodedHand) -> HoldMask {
    let high: Vec<usize> = (0..5)
        .filter(|&p| h.cards[p].value() > HIGH_CARD_FLOOR)
        .collect();
    match high.as_slice() {
        [] | [_] => HoldMask::NONE,
        &[a, b, c] => {
            let linked = |x: usize, y: usize| {
                let (cx, cy) = (h.cards[x], h.cards[y]);
                cx.suit == cy.suit || cx.value().abs_diff(cy.value()) == 1
            };
            let pick = [(b, c), (a, b), (a, c)]
                .into_iter()
                .find(|&(x, y)| linked(x, y))
                .unwrap_or((a, c));
            HoldMask::from_positions([pick.0, pick.1])
        }
        many => HoldMask::from_positions(many[many.len() - 2..].iter().copied()),
    }
}

/// [`strategy1`] as a hold provider.
#[derive(Debug, Clone, Default)]
pub struct HeuristicStrategy;

impl HeuristicStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl HoldProvider for HeuristicStrategy {
    fn decide(&mut self, hand: &EncodedHand) -> HoldDecision {
        let mask = strategy1(hand);
        trace!(hold = %mask, "strategy1 decision");
        HoldDecision::Hold(mask)
    }

    fn name(&self) -> &str {
        "strategy1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidpoker_engine::cards::parse_hand;
    use vidpoker_engine::hand::encode;

    fn hold(s: &str) -> String {
        strategy1(&encode(parse_hand(s).unwrap())).to_string()
    }

    #[test]
    fn made_hands_hold_everything() {
        assert_eq!(hold("Ts Js Qs Ks As"), "12345");
        assert_eq!(hold("Ac 2c 3c 4c 5c"), "12345");
        assert_eq!(hold("9s 9h 9d 9c 2d"), "12345");
        assert_eq!(hold("9s 9h 9d 4c 4d"), "12345");
        assert_eq!(hold("2h 7h 9h Jh Kh"), "12345");
        assert_eq!(hold("Ac 2d 3h 4s 5c"), "12345");
    }

    #[test]
    fn trips_hold_the_matching_three() {
        assert_eq!(hold("2c 8d 8h 8s Kc"), "234");
        assert_eq!(hold("Kc Kd Kh 3s 5c"), "345");
    }

    #[test]
    fn pairs_hold_both_cards() {
        assert_eq!(hold("3c 3d 7h 9s Kc"), "12");
        assert_eq!(hold("3c 3d 8h 8s Kc"), "1234");
    }

    #[test]
    fn four_to_a_flush_beats_the_royal_draw() {
        // four to a flush sits above three to a royal in the tier order
        // sorted: 2h Ts Js Qs Ks
        assert_eq!(hold("Ts Js Qs Ks 2h"), "2345");
    }

    #[test]
    fn four_to_a_straight_windows() {
        assert_eq!(hold("5c 6d 7h 8s Kc"), "1234");
        assert_eq!(hold("2c 9d Th Js Qc"), "2345");
    }

    #[test]
    fn three_to_a_royal_window() {
        assert_eq!(hold("Jh Qh Kh 3c 5d"), "345");
        // unsuited run falls through to the high cards
        assert_eq!(hold("Jh Qd Kh 3c 5d"), "45");
    }

    #[test]
    fn high_card_fallback() {
        assert_eq!(hold("Jc Kd 2h 5s 7c"), "45");
        assert_eq!(hold("Jc Qd Ah 2s 6c"), "34");
        assert_eq!(hold("Js Kd As 2h 6c"), "45");
        assert_eq!(hold("Jc 2d 5h 7s 9c"), "");
    }

    #[test]
    fn provider_wraps_the_heuristic() {
        let mut p = HeuristicStrategy::new();
        let hand = encode(parse_hand("3c 3d 7h 9s Kc").unwrap());
        assert_eq!(
            p.decide(&hand),
            HoldDecision::Hold(HoldMask::from_positions([0, 1]))
        );
        assert_eq!(p.name(), "strategy1");
    }
}
