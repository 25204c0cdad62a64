//! # vidpoker CLI Library
//!
//! Command-line front end for the multi-hand video poker engine.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, installs logging and dispatches to the
//! subcommand handler. Output streams are injected so the whole CLI can be
//! driven from tests.
//!
//! ```
//! use std::io;
//! let args = vec!["vidpoker", "eval", "--cards", "Ts Js Qs Ks As"];
//! let code = vidpoker_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one session with an algorithm or at the prompt
//! - `sim`: Monte-Carlo aggregate over many seeded sessions
//! - `eval`: Classify five cards and show the strategy1 hold
//! - `cfg`: Display the resolved configuration and its sources

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod human;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, VidpokerCli};
use commands::{handle_cfg_command, handle_eval_command, handle_play_command, handle_sim_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "eval", "cfg"];

/// Main entry point for the CLI application.
///
/// Returns the process exit code: [`exit_code::SUCCESS`] on success,
/// [`exit_code::ERROR`] on bad arguments or failures and
/// [`exit_code::INTERRUPTED`] when the prompt was interrupted.
///
/// Interactive play reads holds from the process stdin.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// [`run`] with an explicit input stream for the hold prompt.
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: &mut dyn std::io::BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match VidpokerCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };

    logging::init_logging(cli.verbose);

    let result = match cli.cmd {
        Commands::Play {
            session,
            alg,
            json,
            output,
        } => handle_play_command(&session, alg, json, output.as_deref(), out, err, input),
        Commands::Sim {
            session,
            alg,
            runs,
            json,
        } => handle_sim_command(&session, alg, runs, json, out, err),
        Commands::Eval { cards, game } => handle_eval_command(&cards, game, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            if ui::write_error(err, &e.to_string()).is_err() {
                return exit_code::ERROR;
            }
            match e {
                CliError::Interrupted(_) => exit_code::INTERRUPTED,
                _ => exit_code::ERROR,
            }
        }
    }
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            if writeln!(err, "{}", e).is_err()
                || writeln!(err).is_err()
                || writeln!(err, "Multi-hand video poker simulator").is_err()
                || writeln!(err, "Usage: vidpoker <command> [options]\n").is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return exit_code::ERROR;
            }
            for c in COMMANDS {
                if writeln!(err, "  {}", c).is_err() {
                    return exit_code::ERROR;
                }
            }
            if writeln!(err, "\nFor full help, run: vidpoker --help").is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}
