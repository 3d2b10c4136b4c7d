use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub seats: usize,
    pub seed: Option<u64>,
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
    pub starting_stack: ValueSource,
    pub seats: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            seats: ValueSource::Default,
            seed: ValueSource::Default,
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
            starting_stack: 1_000,
            seats: 3,
            seed: None,
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
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolve the config: defaults, then the TOML file named by
/// `SHOWDOWN_CONFIG`, then per-field env overrides.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("SHOWDOWN_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.seats {
            cfg.seats = v;
            sources.seats = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("SHOWDOWN_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(seats) = std::env::var("SHOWDOWN_SEATS")
        && !seats.is_empty()
    {
        cfg.seats = seats
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid seats".into()))?;
        sources.seats = ValueSource::Env;
    }
    if let Ok(stack) = std::env::var("SHOWDOWN_STARTING_STACK")
        && !stack.is_empty()
    {
        cfg.starting_stack = stack
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting_stack".into()))?;
        sources.starting_stack = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    seats: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(2..=9).contains(&cfg.seats) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: seats must be between 2 and 9".into(),
        ));
    }
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must be >0".into(),
        ));
    }
    Ok(())
}
