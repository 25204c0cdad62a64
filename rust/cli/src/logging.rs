//! Subscriber setup for the `vidpoker` binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,vidpoker_engine=debug,vidpoker_ai=debug,vidpoker_cli=debug";

fn default_directives(verbose: bool) -> &'static str {
    if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER }
}

/// Installs the global fmt subscriber on stderr so stdout stays machine
/// readable. `RUST_LOG` wins over `--verbose`. A second call is a no-op.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    // Already installed by an earlier run() in the same process.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
