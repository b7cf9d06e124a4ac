//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `tempcalc.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use serde::Deserialize;
use tempcalc_domain::classifier::Strategy;
use tempcalc_domain::error::ValidationError;
use tempcalc_domain::options::RoomOptions;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the snapshot dumps live.
    pub snapshot: SnapshotConfig,
    /// Classification strategy and room constraints.
    pub selection: SelectionConfig,
    /// Previously saved room options.
    pub options: OptionsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Snapshot file locations.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// `/api/states` dump.
    pub states: PathBuf,
    /// Area registry dump.
    pub areas: Option<PathBuf>,
}

/// Selection parameters.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub strategy: Strategy,
    /// Area name restricting the candidates.
    pub room_area: Option<String>,
    /// Text fragment restricting the candidates.
    pub room_filter: Option<String>,
}

/// Saved options to validate and pre-fill from.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OptionsConfig {
    /// JSON file holding a previously saved option mapping.
    pub previous: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `tempcalc.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if an
    /// override or the resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("tempcalc.toml")?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("TEMPCALC_STATES") {
            self.snapshot.states = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("TEMPCALC_AREAS") {
            self.snapshot.areas = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("TEMPCALC_STRATEGY") {
            self.selection.strategy = val.parse()?;
        }
        if let Ok(val) = std::env::var("TEMPCALC_ROOM_AREA") {
            self.selection.room_area = Some(val);
        }
        if let Ok(val) = std::env::var("TEMPCALC_ROOM_FILTER") {
            self.selection.room_filter = Some(val);
        }
        if let Ok(val) = std::env::var("TEMPCALC_PREVIOUS_OPTIONS") {
            self.options.previous = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("TEMPCALC_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.snapshot.states.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "snapshot.states must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl SelectionConfig {
    /// Overlay the configured room constraints onto saved options.
    #[must_use]
    pub fn constrain(&self, previous: Option<RoomOptions>) -> Option<RoomOptions> {
        if self.room_area.is_none() && self.room_filter.is_none() {
            return previous;
        }
        let mut options = previous.unwrap_or_default();
        if let Some(area) = &self.room_area {
            options.room_area = Some(area.clone());
        }
        if let Some(filter) = &self.room_filter {
            options.room_filter = Some(filter.clone());
        }
        Some(options)
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            states: PathBuf::from("states.json"),
            areas: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "tempcalcd=info,tempcalc_app=info,tempcalc_adapter_snapshot_json=info"
                .to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// An override carried an invalid value.
    #[error("invalid override")]
    Override(#[from] ValidationError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
