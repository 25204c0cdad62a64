//! Monte-Carlo replication of whole sessions.
//!
//! Replicates share nothing but the frozen config; each one builds its own
//! session, shuffle source and hold provider, so they run as independent rayon
//! tasks and only their scalar results are joined.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SessionConfig;
use crate::deck::SeededShuffle;
use crate::errors::GameError;
use crate::hold::HoldProvider;
use crate::session::{Session, SessionEnd};

/// Scalar result of one replicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    pub seed: u64,
    pub end: SessionEnd,
    pub rounds: u64,
    pub final_balance: f64,
    pub max_balance: f64,
    pub peak_ratio: f64,
    pub max_return: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloSummary {
    pub runs: usize,
    pub mean_final_balance: f64,
    pub mean_rounds: f64,
    pub best_final_balance: f64,
    pub mean_peak_ratio: f64,
    pub ends: BTreeMap<SessionEnd, usize>,
    pub outcomes: Vec<RunOutcome>,
}

/// Plays one full session seeded with `seed`.
pub fn run_once(
    config: &SessionConfig,
    seed: u64,
    provider: &mut dyn HoldProvider,
) -> Result<RunOutcome, GameError> {
    let mut session = Session::new(config.clone())?;
    let mut src = SeededShuffle::new_with_seed(seed);
    let end = session.run(&mut src, provider)?;
    let state = session.state();
    let outcome = RunOutcome {
        seed,
        end,
        rounds: state.steps(),
        final_balance: state.balance(),
        max_balance: state.max_balance(),
        peak_ratio: state.peak_ratio(),
        max_return: state.max_return_amount(),
    };
    debug!(seed, end = ?end, rounds = outcome.rounds, balance = outcome.final_balance, "replicate finished");
    Ok(outcome)
}

/// Runs `runs` sessions in parallel; replicate `i` is seeded `base_seed + i`
/// and gets a fresh provider from `factory(seed)`.
pub fn run_monte_carlo<F>(
    config: &SessionConfig,
    runs: usize,
    base_seed: u64,
    factory: F,
) -> Result<MonteCarloSummary, GameError>
where
    F: Fn(u64) -> Box<dyn HoldProvider> + Sync,
{
    if runs == 0 {
        return Err(GameError::InvalidConfig("runs must be >= 1".to_string()));
    }
    config.validate()?;

    let outcomes = (0..runs)
        .into_par_iter()
        .map(|i| {
            let seed = base_seed.wrapping_add(i as u64);
            let mut provider = factory(seed);
            run_once(config, seed, provider.as_mut())
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(summarize(outcomes))
}

fn summarize(outcomes: Vec<RunOutcome>) -> MonteCarloSummary {
    let n = outcomes.len() as f64;
    let mean = |f: fn(&RunOutcome) -> f64| outcomes.iter().map(f).sum::<f64>() / n;
    let mut ends = BTreeMap::new();
    for o in &outcomes {
        *ends.entry(o.end).or_insert(0) += 1;
    }
    MonteCarloSummary {
        runs: outcomes.len(),
        mean_final_balance: mean(|o| o.final_balance),
        mean_rounds: mean(|o| o.rounds as f64),
        best_final_balance: outcomes
            .iter()
            .map(|o| o.final_balance)
            .fold(f64::NEG_INFINITY, f64::max),
        mean_peak_ratio: mean(|o| o.peak_ratio),
        ends,
        outcomes,
    }
}
