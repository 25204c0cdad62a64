use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use vidpoker_ai::HoldAlgorithm;
use vidpoker_engine::errors::GameError;
use vidpoker_engine::multiplier::MultiplierMode;
use vidpoker_engine::paytable::Variant;

/// Who decides the holds: one of the automatic algorithms or a person at the
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldChoice {
    Auto(HoldAlgorithm),
    Human,
}

impl Default for HoldChoice {
    fn default() -> Self {
        HoldChoice::Auto(HoldAlgorithm::Strategy1)
    }
}

impl fmt::Display for HoldChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoldChoice::Auto(alg) => write!(f, "{}", alg),
            HoldChoice::Human => f.write_str("human"),
        }
    }
}

impl FromStr for HoldChoice {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "i" | "human" | "input" => Ok(HoldChoice::Human),
            other => other.parse().map(HoldChoice::Auto),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub balance: f64,
    pub bet: f64,
    pub hands: usize,
    pub game: Variant,
    pub multiplier: MultiplierMode,
    pub alg: HoldChoice,
    pub runs: usize,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub balance: ValueSource,
    pub bet: ValueSource,
    pub hands: ValueSource,
    pub game: ValueSource,
    pub multiplier: ValueSource,
    pub alg: ValueSource,
    pub runs: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            balance: ValueSource::Default,
            bet: ValueSource::Default,
            hands: ValueSource::Default,
            game: ValueSource::Default,
            multiplier: ValueSource::Default,
            alg: ValueSource::Default,
            runs: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            balance: 100.0,
            bet: 0.05,
            hands: 10,
            game: Variant::JacksOrBetter,
            multiplier: MultiplierMode::None,
            alg: HoldChoice::default(),
            runs: 1,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}
impl From<GameError> for ConfigError {
    fn from(e: GameError) -> Self {
        ConfigError::Invalid(e.to_string())
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_env<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {:?}", name, value)))
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env_value("VIDPOKER_CONFIG") {
        let s = crate::io_utils::read_text(std::path::Path::new(&path))?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.balance {
            cfg.balance = v;
            sources.balance = ValueSource::File;
        }
        if let Some(v) = f.bet {
            cfg.bet = v;
            sources.bet = ValueSource::File;
        }
        if let Some(v) = f.hands {
            cfg.hands = v;
            sources.hands = ValueSource::File;
        }
        if let Some(v) = f.game {
            cfg.game = v.parse()?;
            sources.game = ValueSource::File;
        }
        if let Some(v) = f.multiplier {
            cfg.multiplier = v.parse()?;
            sources.multiplier = ValueSource::File;
        }
        if let Some(v) = f.alg {
            cfg.alg = v.parse()?;
            sources.alg = ValueSource::File;
        }
        if let Some(v) = f.runs {
            cfg.runs = v;
            sources.runs = ValueSource::File;
        }
    }

    if let Some(v) = env_value("VIDPOKER_SEED") {
        cfg.seed = Some(parse_env("VIDPOKER_SEED", &v)?);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_value("VIDPOKER_BALANCE") {
        cfg.balance = parse_env("VIDPOKER_BALANCE", &v)?;
        sources.balance = ValueSource::Env;
    }
    if let Some(v) = env_value("VIDPOKER_BET") {
        cfg.bet = parse_env("VIDPOKER_BET", &v)?;
        sources.bet = ValueSource::Env;
    }
    if let Some(v) = env_value("VIDPOKER_HANDS") {
        cfg.hands = parse_env("VIDPOKER_HANDS", &v)?;
        sources.hands = ValueSource::Env;
    }
    if let Some(v) = env_value("VIDPOKER_GAME") {
        cfg.game = v.parse()?;
        sources.game = ValueSource::Env;
    }
    if let Some(v) = env_value("VIDPOKER_MULTIPLIER") {
        cfg.multiplier = v.parse()?;
        sources.multiplier = ValueSource::Env;
    }
    if let Some(v) = env_value("VIDPOKER_ALG") {
        cfg.alg = v.parse()?;
        sources.alg = ValueSource::Env;
    }
    if let Some(v) = env_value("VIDPOKER_RUNS") {
        cfg.runs = parse_env("VIDPOKER_RUNS", &v)?;
        sources.runs = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    balance: Option<f64>,
    #[serde(default)]
    bet: Option<f64>,
    #[serde(default)]
    hands: Option<usize>,
    #[serde(default)]
    game: Option<String>,
    #[serde(default)]
    multiplier: Option<String>,
    #[serde(default)]
    alg: Option<String>,
    #[serde(default)]
    runs: Option<usize>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.balance.is_nan() || cfg.balance <= 0.0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: balance must be >0".into(),
        ));
    }
    if cfg.bet.is_nan() || cfg.bet <= 0.0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: bet must be >0".into(),
        ));
    }
    if cfg.hands == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: hands must be >=1".into(),
        ));
    }
    if cfg.runs == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: runs must be >=1".into(),
        ));
    }
    Ok(())
}
