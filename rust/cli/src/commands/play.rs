//! # Play Command
//!
//! Plays one session, either with an automatic hold algorithm or with the
//! holds typed at the prompt (`--alg human`). Human play shows every round as
//! it completes; both modes finish with the session summary.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::debug;
use vidpoker_ai::create_hold_provider;
use vidpoker_engine::deck::SeededShuffle;
use vidpoker_engine::session::{Session, SessionEnd, SessionStep, SessionSummary};

use crate::cli::SessionArgs;
use crate::commands::build_session;
use crate::config::{self, HoldChoice};
use crate::error::CliError;
use crate::formatters::{format_round, format_summary};
use crate::human::HumanHold;
use crate::io_utils::ensure_parent_dir;

/// Handle the play command.
///
/// `alg` falls back to the configured algorithm. `output` receives the JSON
/// summary in addition to whatever is printed on `out`.
pub fn handle_play_command(
    args: &SessionArgs,
    alg: Option<HoldChoice>,
    json: bool,
    output: Option<&str>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let plan = build_session(&cfg, args, err)?;
    let alg = alg.unwrap_or(cfg.alg);
    debug!(seed = plan.seed, alg = %alg, "starting play");

    let mut session = Session::new(plan.config)?;
    let mut src = SeededShuffle::new_with_seed(plan.seed);

    let end = match alg {
        HoldChoice::Auto(alg) => {
            let mut provider = create_hold_provider(alg, plan.seed);
            session.run(&mut src, provider.as_mut())?
        }
        HoldChoice::Human => play_interactive(&mut session, &mut src, plan.seed, out, err, stdin)?,
    };

    let summary = session.summary(end);
    if json {
        writeln!(out, "{}", summary_json(&summary)?)?;
    } else {
        writeln!(out, "Seed: {}", plan.seed)?;
        write!(out, "{}", format_summary(&summary))?;
    }
    if let Some(path) = output {
        write_summary(Path::new(path), &summary)?;
    }
    Ok(())
}

fn play_interactive(
    session: &mut Session,
    src: &mut SeededShuffle,
    seed: u64,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<SessionEnd, CliError> {
    let mut human = HumanHold::new(stdin, out, err, seed);
    loop {
        if session.end().is_none() {
            let state = session.state();
            writeln!(
                human.out(),
                "\nBalance {:.2}  bet {:.2} x {} hands",
                state.balance(),
                state.bet(),
                state.hand_count()
            )?;
        }
        match session.step(src, &mut human)? {
            SessionStep::Round(report) => write!(human.out(), "{}", format_round(&report))?,
            SessionStep::Ended(end) => {
                if let Some(e) = human.take_error() {
                    return Err(e);
                }
                writeln!(human.out())?;
                return Ok(end);
            }
        }
    }
}

fn summary_json(summary: &SessionSummary) -> Result<String, CliError> {
    serde_json::to_string_pretty(summary)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))
}

fn write_summary(path: &Path, summary: &SessionSummary) -> Result<(), CliError> {
    ensure_parent_dir(path).map_err(CliError::InvalidInput)?;
    std::fs::write(path, summary_json(summary)? + "\n")?;
    Ok(())
}
