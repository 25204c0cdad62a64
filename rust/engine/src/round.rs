//! One betting round for `hand_count` replicated hands.
//!
//! ```text
//! Idle --bet--> Betting --deal--> Dealt --draw--> Drawn --evaluate--> Evaluated
//!   \              \                 \
//!    +--------------+-----------------+--> Terminal (exhausted bankroll or quit)
//! ```
//!
//! All replicated hands share the five dealt cards. Hand 0 draws from the
//! rest of the dealt deck; every other hand draws from its own independently
//! shuffled copy of that 47-card remainder.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cards::Card;
use crate::classify::{classify, Label};
use crate::deck::{Deck, ShuffleSource};
use crate::errors::GameError;
use crate::hand::{encode, EncodedHand};
use crate::hold::{HoldDecision, HoldMask, HoldProvider};
use crate::paytable::payout;
use crate::session::SessionState;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundPhase {
    Idle,
    Betting,
    Dealt,
    Drawn,
    Evaluated,
    Terminal,
}

/// One replicated hand after evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicatedHand {
    pub cards: [Card; 5],
    pub label: Option<Label>,
    pub multiplier: u32,
    pub return_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 1-based round number within the session.
    pub step: u64,
    /// Dealt cards in hold-position order.
    pub initial: [Card; 5],
    pub hold: HoldMask,
    /// Bet plus multiplier surcharge.
    pub cost: f64,
    pub hands: Vec<ReplicatedHand>,
    pub total_return: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RoundOutcome {
    Completed(RoundReport),
    /// The bankroll could not cover the bet and surcharge.
    Exhausted,
    /// The hold provider asked to stop.
    Quit,
}

#[derive(Debug)]
pub struct Round {
    phase: RoundPhase,
    hand_count: usize,
    balance_before: f64,
    cost: f64,
    multipliers: Vec<u32>,
    initial: Option<EncodedHand>,
    hold: HoldMask,
    pools: Vec<Vec<Card>>,
    drawn: Vec<[Card; 5]>,
}

impl Round {
    pub fn new(hand_count: usize) -> Self {
        Self {
            phase: RoundPhase::Idle,
            hand_count,
            balance_before: 0.0,
            cost: 0.0,
            multipliers: Vec::with_capacity(hand_count),
            initial: None,
            hold: HoldMask::NONE,
            pools: Vec::with_capacity(hand_count),
            drawn: Vec::with_capacity(hand_count),
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    fn expect_phase(&self, expected: RoundPhase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::OutOfPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Takes the bet and the surcharge as one debit before any card is dealt.
    ///
    /// Returns `false` (and moves to `Terminal`) with nothing taken when the
    /// bankroll cannot cover both.
    pub fn bet(
        &mut self,
        state: &mut SessionState,
        src: &mut dyn ShuffleSource,
    ) -> Result<bool, GameError> {
        self.expect_phase(RoundPhase::Idle)?;
        let base = state.bet() * self.hand_count as f64;
        let mode = state.multiplier_mode();
        let surcharge = mode.surcharge(state.bet(), self.hand_count);
        self.balance_before = state.balance();
        if state.balance() < base + surcharge {
            debug!(base, surcharge, balance = state.balance(), "bankroll cannot cover the round");
            self.phase = RoundPhase::Terminal;
            return Ok(false);
        }

        self.multipliers = mode.round_multipliers(state.previous_labels(), self.hand_count, src);
        state.debit(base + surcharge);
        self.cost = base + surcharge;
        self.phase = RoundPhase::Betting;
        Ok(true)
    }

    /// Shuffles, deals the shared five cards and prepares one draw pool per
    /// replicated hand.
    pub fn deal(&mut self, src: &mut dyn ShuffleSource) -> Result<&EncodedHand, GameError> {
        self.expect_phase(RoundPhase::Betting)?;
        let mut deck = Deck::shuffled(src);
        let dealt = deck.deal_hand().ok_or(GameError::DeckExhausted)?;

        self.pools.clear();
        self.pools.push(deck.undealt().to_vec());
        for _ in 1..self.hand_count {
            let mut pool = deck.undealt().to_vec();
            src.shuffle_cards(&mut pool);
            self.pools.push(pool);
        }

        self.phase = RoundPhase::Dealt;
        Ok(&*self.initial.insert(encode(dealt)))
    }

    /// Replaces every position not in `hold`, per hand, from that hand's pool.
    pub fn draw(&mut self, hold: HoldMask) -> Result<(), GameError> {
        self.expect_phase(RoundPhase::Dealt)?;
        let initial = self.initial.ok_or(GameError::DeckExhausted)?;
        self.hold = hold;
        self.drawn = self
            .pools
            .iter()
            .map(|pool| {
                let mut cards = initial.cards;
                let mut replacements = pool.iter();
                for (p, slot) in cards.iter_mut().enumerate() {
                    if hold.holds(p) {
                        continue;
                    }
                    if let Some(&c) = replacements.next() {
                        *slot = c;
                    }
                }
                cards
            })
            .collect();
        self.phase = RoundPhase::Drawn;
        Ok(())
    }

    /// Classifies and pays every hand in replicate order and books the round.
    pub fn evaluate(&mut self, state: &mut SessionState) -> Result<RoundReport, GameError> {
        self.expect_phase(RoundPhase::Drawn)?;
        let initial = self.initial.ok_or(GameError::DeckExhausted)?;
        let variant = state.variant();
        let bet = state.bet();
        let step = state.begin_evaluation();

        let mut hands = Vec::with_capacity(self.drawn.len());
        for (index, cards) in self.drawn.iter().enumerate() {
            let label = classify(variant, &encode(*cards));
            let multiplier = self.multipliers.get(index).copied().unwrap_or(1);
            let return_amount = payout(variant, label, bet, multiplier);
            trace!(step, index, label = ?label, multiplier, return_amount, "hand evaluated");
            let hand = ReplicatedHand {
                cards: *cards,
                label,
                multiplier,
                return_amount,
            };
            state.record_hand(index, &hand);
            hands.push(hand);
        }

        state.finish_round(self.balance_before);
        let total_return: f64 = hands.iter().map(|h| h.return_amount).sum();
        debug!(
            step,
            cost = self.cost,
            total_return,
            balance = state.balance(),
            hold = %self.hold,
            "round evaluated"
        );
        self.phase = RoundPhase::Evaluated;
        Ok(RoundReport {
            step,
            initial: initial.cards,
            hold: self.hold,
            cost: self.cost,
            hands,
            total_return,
            balance: state.balance(),
        })
    }

    /// Abandons a dealt round; the bet already taken is not returned.
    pub fn quit(&mut self) -> Result<(), GameError> {
        self.expect_phase(RoundPhase::Dealt)?;
        self.phase = RoundPhase::Terminal;
        Ok(())
    }
}

/// Runs bet, deal, hold decision, draw and evaluation for one round.
pub fn play_round(
    state: &mut SessionState,
    src: &mut dyn ShuffleSource,
    provider: &mut dyn HoldProvider,
) -> Result<RoundOutcome, GameError> {
    let mut round = Round::new(state.hand_count());
    if !round.bet(state, src)? {
        return Ok(RoundOutcome::Exhausted);
    }
    let initial = *round.deal(src)?;
    match provider.decide(&initial) {
        HoldDecision::Quit => {
            round.quit()?;
            Ok(RoundOutcome::Quit)
        }
        HoldDecision::Hold(mask) => {
            round.draw(mask)?;
            Ok(RoundOutcome::Completed(round.evaluate(state)?))
        }
    }
}
