//! Command handlers.
//!
//! Every subcommand exposes `handle_COMMAND_command(...) -> Result<(), CliError>`
//! and receives its output streams as `&mut dyn Write`, so tests can drive the
//! handlers with in-memory buffers.

mod cfg;
mod eval;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

use std::io::Write;

use vidpoker_engine::config::{BetReduction, ExitCondition, SessionConfig};

use crate::cli::{ExitKind, SessionArgs};
use crate::config::Config;
use crate::error::CliError;
use crate::ui;

/// Session configuration plus the seed that drives the deck.
pub(crate) struct SessionPlan {
    pub config: SessionConfig,
    pub seed: u64,
}

/// Merges flags over the resolved configuration. Flags win; a missing seed
/// is drawn at random.
pub(crate) fn build_session(
    cfg: &Config,
    args: &SessionArgs,
    err: &mut dyn Write,
) -> Result<SessionPlan, CliError> {
    let exit = match args.exit {
        Some(kind) => Some(exit_condition(kind, args)?),
        None => {
            for (set, flag) in [
                (args.exit_rounds.is_some(), "exit-rounds"),
                (args.exit_return.is_some(), "exit-return"),
                (args.band_lower.is_some(), "band-lower"),
                (args.band_upper.is_some(), "band-upper"),
            ] {
                if set {
                    ui::display_warning(
                        err,
                        &format!("--{} has no effect without --exit", flag),
                    )?;
                }
            }
            None
        }
    };

    let bet_reduction = match (args.reduce_step, args.min_bet) {
        (Some(step), Some(min_bet)) => Some(BetReduction { step, min_bet }),
        _ => None,
    };

    let config = SessionConfig {
        initial_balance: args.balance.unwrap_or(cfg.balance),
        bet: args.bet.unwrap_or(cfg.bet),
        hand_count: args.hands.unwrap_or(cfg.hands),
        variant: args.game.unwrap_or(cfg.game),
        multiplier: args.multiplier.unwrap_or(cfg.multiplier),
        exit,
        bet_reduction,
    };
    config.validate()?;

    Ok(SessionPlan {
        config,
        seed: args.seed.or(cfg.seed).unwrap_or_else(rand::random),
    })
}

fn exit_condition(kind: ExitKind, args: &SessionArgs) -> Result<ExitCondition, CliError> {
    let mut exit = ExitCondition::from_code(kind.as_str())?;
    match &mut exit {
        ExitCondition::ElapsedRounds { rounds } => {
            if let Some(n) = args.exit_rounds {
                *rounds = n;
            }
        }
        ExitCondition::ReturnThreshold { multiple } => {
            if let Some(m) = args.exit_return {
                *multiple = m;
            }
        }
        ExitCondition::BalanceBand { lower, upper } => {
            if let Some(l) = args.band_lower {
                *lower = l;
            }
            if let Some(u) = args.band_upper {
                *upper = u;
            }
        }
    }
    Ok(exit)
}
