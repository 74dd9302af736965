use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use time::UtcOffset;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";
pub const DEFAULT_SERVER_PORT: u16 = 8080;
/// Solapur local time, UTC+05:30.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 330;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub app: AppSection,
    pub logging: LoggingSection,
    #[serde(default)]
    pub availability: Option<FileSection>,
    #[serde(default)]
    pub zones: Option<FileSection>,
    #[serde(default)]
    pub server: Option<ServerSection>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSection {
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSection {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FileSection {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSection {
    /// Port to listen on (default: 8080)
    pub port: Option<u16>,
    /// Local wall-clock offset used for peak hours (default: 330, IST)
    pub utc_offset_minutes: Option<i32>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

pub fn load_default() -> Result<Config, ConfigError> {
    load_from_path(DEFAULT_CONFIG_PATH)
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

fn non_empty_path(section: Option<&FileSection>) -> Option<&Path> {
    let path = section?.path.as_deref()?;
    if path.as_os_str().is_empty() {
        None
    } else {
        Some(path)
    }
}

impl Config {
    pub fn availability_path(&self) -> Option<&Path> {
        non_empty_path(self.availability.as_ref())
    }

    pub fn zones_path(&self) -> Option<&Path> {
        non_empty_path(self.zones.as_ref())
    }

    /// Returns the server port (default: 8080)
    pub fn server_port(&self) -> u16 {
        self.server
            .as_ref()
            .and_then(|s| s.port)
            .unwrap_or(DEFAULT_SERVER_PORT)
    }

    pub fn local_offset(&self) -> Result<UtcOffset, ConfigError> {
        let minutes = self
            .server
            .as_ref()
            .and_then(|s| s.utc_offset_minutes)
            .unwrap_or(DEFAULT_UTC_OFFSET_MINUTES);
        UtcOffset::from_whole_seconds(minutes * 60)
            .map_err(|err| ConfigError::Invalid(format!("utc_offset_minutes {minutes}: {err}")))
    }

    pub fn log_level(&self) -> Result<tracing::Level, ConfigError> {
        self.logging
            .level
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("unknown log level: {}", self.logging.level)))
    }
}
