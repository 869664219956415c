//! Logbook configuration file support.
//!
//! Defaults for freshly imported flights and the physical page size are read from
//! an optional `flugbuch.toml`. Every setting has a default, so an empty file (or
//! no file at all) yields the same behaviour as [`LogbookConfig::default`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::domain::{Role, TimeOfDay};

/// Role given to imported flights before the user classifies them.
pub const DEFAULT_ROLE: Role = Role::Dual;

/// Time of day given to imported flights before the user classifies them.
pub const DEFAULT_TIME_OF_DAY: TimeOfDay = TimeOfDay::Day;

/// Rows on one printed logbook page.
pub const FLIGHTS_PER_PAGE: usize = 10;

/// Page pre-assigned to imported flights.
pub const DEFAULT_SEED_PAGE: u32 = 1;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Logbook configuration from file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogbookConfig {
    #[serde(default)]
    pub import: ImportSettings,
    #[serde(default)]
    pub logbook: LogbookSettings,
}

/// Classification defaults applied to every imported row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSettings {
    #[serde(default = "default_role")]
    pub default_role: Role,
    #[serde(default = "default_time_of_day")]
    pub default_time_of_day: TimeOfDay,
    /// Page given to imported rows; `0` leaves the page unset.
    #[serde(default = "default_seed_page")]
    pub seed_page: u32,
}

/// Layout of the printed logbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogbookSettings {
    #[serde(default = "default_flights_per_page")]
    pub flights_per_page: usize,
}

fn default_role() -> Role {
    DEFAULT_ROLE
}

fn default_time_of_day() -> TimeOfDay {
    DEFAULT_TIME_OF_DAY
}

fn default_seed_page() -> u32 {
    DEFAULT_SEED_PAGE
}

fn default_flights_per_page() -> usize {
    FLIGHTS_PER_PAGE
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            default_role: default_role(),
            default_time_of_day: default_time_of_day(),
            seed_page: default_seed_page(),
        }
    }
}

impl ImportSettings {
    /// Page value stored on imported rows.
    pub fn seed_page(&self) -> Option<u32> {
        (self.seed_page != 0).then_some(self.seed_page)
    }
}

impl Default for LogbookSettings {
    fn default() -> Self {
        Self {
            flights_per_page: default_flights_per_page(),
        }
    }
}

impl FromStr for LogbookConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let config: LogbookConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl LogbookConfig {
    /// Load logbook configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(LogbookConfig)` if successful
    /// * `Err(ConfigError)` if the file cannot be read, parsed or is invalid
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = content.parse::<LogbookConfig>()?;
        log::debug!("Loaded logbook configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the default location, falling back to defaults.
    ///
    /// Searches for `flugbuch.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("flugbuch.toml"),
            PathBuf::from("rust_backend/flugbuch.toml"),
            PathBuf::from("../flugbuch.toml"),
        ];

        for path in &search_paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        log::debug!("No flugbuch.toml found, using built-in defaults");
        Ok(Self::default())
    }

    /// Check settings that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logbook.flights_per_page == 0 {
            return Err(ConfigError::Invalid(
                "'logbook.flights_per_page' must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
