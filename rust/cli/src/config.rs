use serde::{Deserialize, Serialize};
use std::fs;

use holdem_odds_engine::equity::DEFAULT_TRIALS;
use holdem_odds_engine::lcg::DEFAULT_SEED;

pub const CONFIG_ENV: &str = "HOLDEM_ODDS_CONFIG";
pub const SEED_ENV: &str = "HOLDEM_ODDS_SEED";
pub const TRIALS_ENV: &str = "HOLDEM_ODDS_TRIALS";
pub const OPPONENTS_ENV: &str = "HOLDEM_ODDS_OPPONENTS";
pub const WORKERS_ENV: &str = "HOLDEM_ODDS_WORKERS";

pub const MAX_OPPONENTS: u8 = 9;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: u64,
    pub trials: u32,
    pub opponents: u8,
    pub workers: usize,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub trials: ValueSource,
    pub opponents: ValueSource,
    pub workers: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            trials: ValueSource::Default,
            opponents: ValueSource::Default,
            workers: ValueSource::Default,
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
            seed: DEFAULT_SEED,
            trials: DEFAULT_TRIALS,
            opponents: 1,
            workers: 1,
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

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = v;
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.trials {
            cfg.trials = v;
            sources.trials = ValueSource::File;
        }
        if let Some(v) = f.opponents {
            cfg.opponents = v;
            sources.opponents = ValueSource::File;
        }
        if let Some(v) = f.workers {
            cfg.workers = v;
            sources.workers = ValueSource::File;
        }
    }

    if let Some(v) = env_value(SEED_ENV, "Invalid seed")? {
        cfg.seed = v;
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_value(TRIALS_ENV, "Invalid trials")? {
        cfg.trials = v;
        sources.trials = ValueSource::Env;
    }
    if let Some(v) = env_value(OPPONENTS_ENV, "Invalid opponents")? {
        cfg.opponents = v;
        sources.opponents = ValueSource::Env;
    }
    if let Some(v) = env_value(WORKERS_ENV, "Invalid workers")? {
        cfg.workers = v;
        sources.workers = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value<T: std::str::FromStr>(key: &str, msg: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(msg.into())),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    trials: Option<u32>,
    #[serde(default)]
    opponents: Option<u8>,
    #[serde(default)]
    workers: Option<usize>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.trials == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: trials must be >=1".into(),
        ));
    }
    if !(1..=MAX_OPPONENTS).contains(&cfg.opponents) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: opponents must be 1..={}",
            MAX_OPPONENTS
        )));
    }
    if cfg.workers == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: workers must be >=1".into(),
        ));
    }
    Ok(())
}
