use crate::cli::OutputFormat;
use connect4_engine::player::Player;
use serde::{Deserialize, Serialize};
use std::fs;

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub first_player: Player,
    pub show_board: bool,
    pub format: OutputFormat,
    pub log_filter: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub first_player: ValueSource,
    pub show_board: ValueSource,
    pub format: ValueSource,
    pub log_filter: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            first_player: ValueSource::Default,
            show_board: ValueSource::Default,
            format: ValueSource::Default,
            log_filter: ValueSource::Default,
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
            first_player: Player::One,
            show_board: true,
            format: OutputFormat::Text,
            log_filter: DEFAULT_LOG_FILTER.into(),
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

impl std::error::Error for ConfigError {}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves the configuration from defaults, then the TOML file named by
/// `CONNECT4_CONFIG`, then `CONNECT4_*` environment variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("CONNECT4_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.first_player {
            cfg.first_player = parse_player(v)?;
            sources.first_player = ValueSource::File;
        }
        if let Some(v) = f.show_board {
            cfg.show_board = v;
            sources.show_board = ValueSource::File;
        }
        if let Some(v) = f.format {
            cfg.format = v;
            sources.format = ValueSource::File;
        }
        if let Some(v) = f.log_filter {
            cfg.log_filter = v;
            sources.log_filter = ValueSource::File;
        }
    }

    if let Ok(first) = std::env::var("CONNECT4_FIRST_PLAYER")
        && !first.is_empty()
    {
        let marker: u8 = first
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid first player".into()))?;
        cfg.first_player = parse_player(marker)?;
        sources.first_player = ValueSource::Env;
    }
    if let Ok(show) = std::env::var("CONNECT4_SHOW_BOARD")
        && !show.is_empty()
    {
        cfg.show_board =
            parse_bool(&show).ok_or_else(|| ConfigError::Invalid("Invalid show_board".into()))?;
        sources.show_board = ValueSource::Env;
    }
    if let Ok(format) = std::env::var("CONNECT4_FORMAT")
        && !format.is_empty()
    {
        cfg.format = parse_format(&format)
            .ok_or_else(|| ConfigError::Invalid("Invalid format (expected text or json)".into()))?;
        sources.format = ValueSource::Env;
    }
    if let Ok(filter) = std::env::var("CONNECT4_LOG")
        && !filter.is_empty()
    {
        cfg.log_filter = filter;
        sources.log_filter = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    first_player: Option<u8>,
    #[serde(default)]
    show_board: Option<bool>,
    #[serde(default)]
    format: Option<OutputFormat>,
    #[serde(default)]
    log_filter: Option<String>,
}

fn parse_player(marker: u8) -> Result<Player, ConfigError> {
    Player::try_from(marker)
        .map_err(|e| ConfigError::Invalid(format!("invalid first_player: {}", e)))
}

fn parse_format(s: &str) -> Option<OutputFormat> {
    match s.to_ascii_lowercase().as_str() {
        "text" => Some(OutputFormat::Text),
        "json" => Some(OutputFormat::Json),
        _ => None,
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
