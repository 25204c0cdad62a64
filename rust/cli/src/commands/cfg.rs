//! Configuration command handler.
//!
//! Prints every setting with the layer it came from:
//!
//! ```json
//! {
//!   "bet": {
//!     "value": 0.05,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use std::io::Write;

use crate::config;
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;

    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "balance": {
            "value": config.balance,
            "source": sources.balance,
        },
        "bet": {
            "value": config.bet,
            "source": sources.bet,
        },
        "hands": {
            "value": config.hands,
            "source": sources.hands,
        },
        "game": {
            "value": config.game.code(),
            "source": sources.game,
        },
        "multiplier": {
            "value": config.multiplier.code(),
            "source": sources.multiplier,
        },
        "alg": {
            "value": config.alg.to_string(),
            "source": sources.alg,
        },
        "runs": {
            "value": config.runs,
            "source": sources.runs,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
