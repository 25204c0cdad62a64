//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use vidpoker_engine::multiplier::MultiplierMode;
use vidpoker_engine::paytable::Variant;

use crate::config::HoldChoice;

#[derive(Parser, Debug)]
#[command(
    name = "vidpoker",
    version,
    about = "Multi-hand video poker simulator"
)]
pub struct VidpokerCli {
    /// Log engine events at debug level on stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one session, interactively or with an automatic hold algorithm
    Play {
        #[command(flatten)]
        session: SessionArgs,
        /// Hold algorithm: s1, random, keep, discard or human
        #[arg(long)]
        alg: Option<HoldChoice>,
        /// Print the session summary as JSON
        #[arg(long)]
        json: bool,
        /// Also write the JSON session summary to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Monte-Carlo: replay the whole session N times and aggregate
    Sim {
        #[command(flatten)]
        session: SessionArgs,
        #[arg(long)]
        alg: Option<HoldChoice>,
        /// Number of replicate sessions
        #[arg(long)]
        runs: Option<usize>,
        /// Print the aggregate as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify five cards and show the strategy1 hold
    Eval {
        /// Five cards, e.g. "Ts Js Qs Ks As"
        #[arg(long)]
        cards: String,
        #[arg(long)]
        game: Option<Variant>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Session parameters shared by `play` and `sim`. Unset flags fall back to
/// the layered configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Game variant: job, db or tdb
    #[arg(long)]
    pub game: Option<Variant>,
    /// Multiplier overlay: none, ultx or supt
    #[arg(long)]
    pub multiplier: Option<MultiplierMode>,
    #[arg(long)]
    pub balance: Option<f64>,
    /// Bet denomination per hand
    #[arg(long)]
    pub bet: Option<f64>,
    /// Replicated hands per round
    #[arg(long)]
    pub hands: Option<usize>,
    /// Exit condition: rounds, return or band
    #[arg(long, value_enum)]
    pub exit: Option<ExitKind>,
    /// Round limit for `--exit rounds`
    #[arg(long)]
    pub exit_rounds: Option<u64>,
    /// Bet multiple for `--exit return`
    #[arg(long)]
    pub exit_return: Option<f64>,
    /// Lower fraction of the initial balance for `--exit band`
    #[arg(long)]
    pub band_lower: Option<f64>,
    /// Upper fraction of the initial balance for `--exit band`
    #[arg(long)]
    pub band_upper: Option<f64>,
    /// Lower the bet by this step whenever it exceeds 10% of the balance
    #[arg(long, requires = "min_bet")]
    pub reduce_step: Option<f64>,
    #[arg(long, requires = "reduce_step")]
    pub min_bet: Option<f64>,
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExitKind {
    #[value(alias = "t")]
    Rounds,
    #[value(alias = "r")]
    Return,
    #[value(alias = "p")]
    Band,
}

impl ExitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExitKind::Rounds => "rounds",
            ExitKind::Return => "return",
            ExitKind::Band => "band",
        }
    }
}
