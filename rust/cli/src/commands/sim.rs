//! # Sim Command
//!
//! Monte-Carlo replay of a whole session: `runs` independent sessions on the
//! rayon pool, replicate `i` seeded `seed + i`.

use std::io::Write;

use tracing::debug;
use vidpoker_ai::create_hold_provider;
use vidpoker_engine::hold::HoldProvider;
use vidpoker_engine::montecarlo::run_monte_carlo;

use crate::cli::SessionArgs;
use crate::commands::build_session;
use crate::config::{self, HoldChoice};
use crate::error::CliError;
use crate::formatters::format_monte_carlo;

pub fn handle_sim_command(
    args: &SessionArgs,
    alg: Option<HoldChoice>,
    runs: Option<usize>,
    json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let alg = match alg.unwrap_or(cfg.alg) {
        HoldChoice::Auto(alg) => alg,
        HoldChoice::Human => {
            return Err(CliError::InvalidInput(
                "sim needs an automatic hold algorithm, not human".to_string(),
            ));
        }
    };
    let runs = runs.unwrap_or(cfg.runs);
    if runs == 0 {
        return Err(CliError::InvalidInput("--runs must be >= 1".to_string()));
    }
    let plan = build_session(&cfg, args, err)?;
    debug!(runs, seed = plan.seed, alg = %alg, "starting monte-carlo");

    let summary = run_monte_carlo(&plan.config, runs, plan.seed, |seed| -> Box<dyn HoldProvider> {
        create_hold_provider(alg, seed)
    })?;

    if json {
        let text = serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?;
        writeln!(out, "{}", text)?;
    } else {
        writeln!(
            out,
            "Game: {} / {} / {} hands, alg {}, base seed {}",
            plan.config.variant, plan.config.multiplier, plan.config.hand_count, alg, plan.seed
        )?;
        write!(out, "{}", format_monte_carlo(&summary))?;
    }
    Ok(())
}
