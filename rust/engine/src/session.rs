//! Session bookkeeping and the play-until-exit loop.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::Card;
use crate::classify::Label;
use crate::config::{ExitCondition, SessionConfig};
use crate::deck::ShuffleSource;
use crate::errors::GameError;
use crate::hold::HoldProvider;
use crate::multiplier::MultiplierMode;
use crate::paytable::Variant;
use crate::round::{play_round, ReplicatedHand, RoundOutcome, RoundReport};

/// Why a session stopped.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionEnd {
    Quit,
    BankrollExhausted,
    ElapsedRounds,
    ReturnThreshold,
    BalanceBand,
}

/// Best single-hand return of the session with the bankroll snapshot taken
/// right after it was credited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxReturnRecord {
    pub label: Option<Label>,
    pub cards: [Card; 5],
    pub multiplier: u32,
    pub return_amount: f64,
    pub balance: f64,
    pub profit: f64,
    pub step: u64,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    variant: Variant,
    multiplier_mode: MultiplierMode,
    hand_count: usize,
    bet: f64,
    balance: f64,
    init_balance: f64,
    max_balance: f64,
    peak_ratio: f64,
    step_counter: u64,
    histogram: BTreeMap<Label, u64>,
    max_return: Option<MaxReturnRecord>,
    balance_series: Vec<f64>,
    delta_series: Vec<f64>,
    previous_labels: Vec<Option<Label>>,
}

impl SessionState {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            variant: config.variant,
            multiplier_mode: config.multiplier,
            hand_count: config.hand_count,
            bet: config.bet,
            balance: config.initial_balance,
            init_balance: config.initial_balance,
            max_balance: config.initial_balance,
            peak_ratio: 1.0,
            step_counter: 0,
            histogram: config.variant.labels().map(|l| (l, 0)).collect(),
            max_return: None,
            balance_series: Vec::new(),
            delta_series: Vec::new(),
            previous_labels: vec![None; config.hand_count],
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }
    pub fn multiplier_mode(&self) -> MultiplierMode {
        self.multiplier_mode
    }
    pub fn hand_count(&self) -> usize {
        self.hand_count
    }
    pub fn bet(&self) -> f64 {
        self.bet
    }
    pub fn balance(&self) -> f64 {
        self.balance
    }
    pub fn init_balance(&self) -> f64 {
        self.init_balance
    }
    pub fn max_balance(&self) -> f64 {
        self.max_balance
    }
    /// Highest `balance / init_balance` seen so far.
    pub fn peak_ratio(&self) -> f64 {
        self.peak_ratio
    }
    /// Completed rounds.
    pub fn steps(&self) -> u64 {
        self.step_counter
    }
    pub fn histogram(&self) -> &BTreeMap<Label, u64> {
        &self.histogram
    }
    pub fn max_return(&self) -> Option<&MaxReturnRecord> {
        self.max_return.as_ref()
    }
    pub fn max_return_amount(&self) -> f64 {
        self.max_return.as_ref().map_or(0.0, |r| r.return_amount)
    }
    /// Balance after each completed round.
    pub fn balance_series(&self) -> &[f64] {
        &self.balance_series
    }
    /// Net balance change of each completed round.
    pub fn delta_series(&self) -> &[f64] {
        &self.delta_series
    }
    /// Label each replicated hand made in the last completed round.
    pub fn previous_labels(&self) -> &[Option<Label>] {
        &self.previous_labels
    }

    pub(crate) fn debit(&mut self, amount: f64) {
        self.balance -= amount;
    }

    pub(crate) fn set_bet(&mut self, bet: f64) {
        self.bet = bet;
    }

    /// Advances the round counter and returns the new 1-based round number.
    pub(crate) fn begin_evaluation(&mut self) -> u64 {
        self.step_counter += 1;
        self.step_counter
    }

    pub(crate) fn record_hand(&mut self, index: usize, hand: &ReplicatedHand) {
        self.balance += hand.return_amount;
        if self.balance > self.max_balance {
            self.max_balance = self.balance;
        }
        let ratio = self.balance / self.init_balance;
        if ratio > self.peak_ratio {
            self.peak_ratio = ratio;
        }

        if let Some(label) = hand.label {
            if self.variant.base_multiplier(label).is_some() {
                *self.histogram.entry(label).or_insert(0) += 1;
            }
        }

        if hand.return_amount > self.max_return_amount() {
            self.max_return = Some(MaxReturnRecord {
                label: hand.label,
                cards: hand.cards,
                multiplier: hand.multiplier,
                return_amount: hand.return_amount,
                balance: self.balance,
                profit: self.balance - self.init_balance,
                step: self.step_counter,
            });
        }

        if let Some(slot) = self.previous_labels.get_mut(index) {
            *slot = hand.label;
        }
    }

    pub(crate) fn finish_round(&mut self, balance_before: f64) {
        self.balance_series.push(self.balance);
        self.delta_series.push(self.balance - balance_before);
    }
}

/// Everything a statistics or plotting consumer reads after a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub variant: Variant,
    pub multiplier: MultiplierMode,
    pub hand_count: usize,
    pub end: SessionEnd,
    pub rounds: u64,
    pub initial_balance: f64,
    pub final_balance: f64,
    pub max_balance: f64,
    pub peak_ratio: f64,
    pub final_bet: f64,
    pub histogram: BTreeMap<Label, u64>,
    pub max_return: Option<MaxReturnRecord>,
    pub balance_series: Vec<f64>,
    pub delta_series: Vec<f64>,
}

/// Result of [`Session::step`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionStep {
    Round(RoundReport),
    Ended(SessionEnd),
}

#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    state: SessionState,
    end: Option<SessionEnd>,
}

impl Session {
    /// Validates `config`; an invalid configuration never starts a session.
    pub fn new(config: SessionConfig) -> Result<Self, GameError> {
        config.validate()?;
        let state = SessionState::new(&config);
        Ok(Self {
            config,
            state,
            end: None,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Applies the bet-reduction policy and plays a single round.
    pub fn play_round(
        &mut self,
        src: &mut dyn ShuffleSource,
        provider: &mut dyn HoldProvider,
    ) -> Result<RoundOutcome, GameError> {
        if let Some(policy) = self.config.bet_reduction {
            let bet = policy.apply(self.state.bet(), self.state.balance());
            self.state.set_bet(bet);
        }
        play_round(&mut self.state, src, provider)
    }

    /// Exit condition reached by the current state, if any.
    pub fn exit_reached(&self) -> Option<SessionEnd> {
        let s = &self.state;
        match self.config.exit? {
            ExitCondition::ElapsedRounds { rounds } if s.steps() >= rounds => {
                Some(SessionEnd::ElapsedRounds)
            }
            ExitCondition::ReturnThreshold { multiple }
                if s.max_return_amount() >= multiple * s.bet() =>
            {
                Some(SessionEnd::ReturnThreshold)
            }
            ExitCondition::BalanceBand { lower, upper }
                if s.balance() >= upper * s.init_balance()
                    || s.balance() <= lower * s.init_balance() =>
            {
                Some(SessionEnd::BalanceBand)
            }
            _ => None,
        }
    }

    /// Plays one round, or reports the end once the session is over.
    ///
    /// A round that trips the exit condition is still returned; the next call
    /// yields [`SessionStep::Ended`].
    pub fn step(
        &mut self,
        src: &mut dyn ShuffleSource,
        provider: &mut dyn HoldProvider,
    ) -> Result<SessionStep, GameError> {
        if let Some(end) = self.end {
            return Ok(SessionStep::Ended(end));
        }
        match self.play_round(src, provider)? {
            RoundOutcome::Exhausted => Ok(self.conclude(SessionEnd::BankrollExhausted, provider)),
            RoundOutcome::Quit => Ok(self.conclude(SessionEnd::Quit, provider)),
            RoundOutcome::Completed(report) => {
                if let Some(end) = self.exit_reached() {
                    self.conclude(end, provider);
                }
                Ok(SessionStep::Round(report))
            }
        }
    }

    fn conclude(&mut self, end: SessionEnd, provider: &dyn HoldProvider) -> SessionStep {
        self.end = Some(end);
        info!(
            end = ?end,
            rounds = self.state.steps(),
            balance = self.state.balance(),
            provider = provider.name(),
            "session finished"
        );
        SessionStep::Ended(end)
    }

    /// Why the session stopped, once it has.
    pub fn end(&self) -> Option<SessionEnd> {
        self.end
    }

    pub fn run(
        &mut self,
        src: &mut dyn ShuffleSource,
        provider: &mut dyn HoldProvider,
    ) -> Result<SessionEnd, GameError> {
        self.run_with(src, provider, |_| {})
    }

    /// Plays rounds until quit, bankroll exhaustion or the exit condition,
    /// handing every completed round to `on_round`.
    pub fn run_with<F>(
        &mut self,
        src: &mut dyn ShuffleSource,
        provider: &mut dyn HoldProvider,
        mut on_round: F,
    ) -> Result<SessionEnd, GameError>
    where
        F: FnMut(&RoundReport),
    {
        loop {
            match self.step(src, provider)? {
                SessionStep::Round(report) => on_round(&report),
                SessionStep::Ended(end) => return Ok(end),
            }
        }
    }

    pub fn summary(&self, end: SessionEnd) -> SessionSummary {
        let s = &self.state;
        SessionSummary {
            variant: s.variant,
            multiplier: s.multiplier_mode,
            hand_count: s.hand_count,
            end,
            rounds: s.step_counter,
            initial_balance: s.init_balance,
            final_balance: s.balance,
            max_balance: s.max_balance,
            peak_ratio: s.peak_ratio,
            final_bet: s.bet,
            histogram: s.histogram.clone(),
            max_return: s.max_return.clone(),
            balance_series: s.balance_series.clone(),
            delta_series: s.delta_series.clone(),
        }
    }
}
