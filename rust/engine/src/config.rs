use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::multiplier::MultiplierMode;
use crate::paytable::Variant;

pub const DEFAULT_EXIT_ROUNDS: u64 = 720;
pub const DEFAULT_RETURN_MULTIPLE: f64 = 25.0;
pub const DEFAULT_BAND_LOWER: f64 = 0.0;
pub const DEFAULT_BAND_UPPER: f64 = 1.2;
/// Bet reduction kicks in once the bet exceeds this share of the balance.
pub const BET_REDUCTION_THRESHOLD: f64 = 0.1;

/// Condition checked after every completed round.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ExitCondition {
    /// Stop once this many rounds have been played.
    ElapsedRounds { rounds: u64 },
    /// Stop once a single hand has returned `multiple * bet` or more.
    ReturnThreshold { multiple: f64 },
    /// Stop once the balance leaves `[lower, upper] * initial balance`.
    BalanceBand { lower: f64, upper: f64 },
}

impl ExitCondition {
    pub fn code(&self) -> &'static str {
        match self {
            ExitCondition::ElapsedRounds { .. } => "rounds",
            ExitCondition::ReturnThreshold { .. } => "return",
            ExitCondition::BalanceBand { .. } => "band",
        }
    }

    /// Builds a condition from its selector with default parameters.
    pub fn from_code(code: &str) -> Result<Self, GameError> {
        match code.trim().to_ascii_lowercase().as_str() {
            "t" | "rounds" => Ok(ExitCondition::ElapsedRounds {
                rounds: DEFAULT_EXIT_ROUNDS,
            }),
            "r" | "return" => Ok(ExitCondition::ReturnThreshold {
                multiple: DEFAULT_RETURN_MULTIPLE,
            }),
            "p" | "band" => Ok(ExitCondition::BalanceBand {
                lower: DEFAULT_BAND_LOWER,
                upper: DEFAULT_BAND_UPPER,
            }),
            other => Err(GameError::UnknownExitCondition(other.to_string())),
        }
    }
}

impl fmt::Display for ExitCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCondition::ElapsedRounds { rounds } => write!(f, "rounds>={rounds}"),
            ExitCondition::ReturnThreshold { multiple } => write!(f, "return>={multiple}x"),
            ExitCondition::BalanceBand { lower, upper } => write!(f, "band[{lower},{upper}]"),
        }
    }
}

/// Lowers the bet by `step` (never below `min_bet`) whenever it exceeds 10%
/// of the current balance.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetReduction {
    pub step: f64,
    pub min_bet: f64,
}

impl BetReduction {
    pub fn apply(&self, bet: f64, balance: f64) -> f64 {
        if bet > BET_REDUCTION_THRESHOLD * balance {
            (bet - self.step).max(self.min_bet)
        } else {
            bet
        }
    }
}

/// Frozen session parameters consumed by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub initial_balance: f64,
    /// Bet denomination per replicated hand.
    pub bet: f64,
    pub hand_count: usize,
    pub variant: Variant,
    pub multiplier: MultiplierMode,
    pub exit: Option<ExitCondition>,
    pub bet_reduction: Option<BetReduction>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_balance: 100.0,
            bet: 0.05,
            hand_count: 10,
            variant: Variant::JacksOrBetter,
            multiplier: MultiplierMode::None,
            exit: None,
            bet_reduction: None,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |msg: &str| Err(GameError::InvalidConfig(msg.to_string()));
        if !(self.initial_balance.is_finite() && self.initial_balance > 0.0) {
            return invalid("initial_balance must be > 0");
        }
        if !(self.bet.is_finite() && self.bet > 0.0) {
            return invalid("bet must be > 0");
        }
        if self.hand_count == 0 {
            return invalid("hand_count must be >= 1");
        }
        match self.exit {
            Some(ExitCondition::ElapsedRounds { rounds: 0 }) => {
                return invalid("exit rounds must be >= 1");
            }
            Some(ExitCondition::ReturnThreshold { multiple }) if !(multiple > 0.0) => {
                return invalid("return multiple must be > 0");
            }
            Some(ExitCondition::BalanceBand { lower, upper })
                if !(lower >= 0.0 && upper > lower && upper.is_finite()) =>
            {
                return invalid("balance band must satisfy 0 <= lower < upper");
            }
            _ => {}
        }
        if let Some(r) = self.bet_reduction {
            if !(r.step > 0.0 && r.min_bet > 0.0) {
                return invalid("bet reduction step and min_bet must be > 0");
            }
        }
        Ok(())
    }
}
