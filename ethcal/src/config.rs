//! `ethcal.toml` — user configuration.
//!
//! ```toml
//! dataset = "holidays.toml"     # relative to this file
//! language = "amharic"
//! asset_base = "https://example.org/assets"
//! log_level = "info"
//! ```
//!
//! Searched, in order, at `$ETHCAL_CONFIG_FILE`,
//! `$XDG_CONFIG_HOME/ethcal/config.toml`, and `~/.ethcal.toml`.  Without any
//! file the defaults apply.

use ec_core::Language;
use ec_engine::{Api, CalendarEngine};
use ec_holidays::HolidaySet;
use serde::Deserialize;
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

const CONFIG_PATH_ENV_VAR: &str = "ETHCAL_CONFIG_FILE";

/// Errors raised while reading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("unable to read config file {}: {source}", path.display())]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// The file is not valid TOML or has unknown fields.
    #[error("invalid config file {}: {source}", path.display())]
    Toml {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying error.
        source: toml::de::Error,
    },

    /// The configured holiday dataset could not be loaded.
    #[error(transparent)]
    Dataset(#[from] ec_core::Error),
}

/// User configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Holiday dataset file; the built-in dataset when absent.
    pub dataset: Option<PathBuf>,
    /// Language of month, weekday, and evangelist names.
    pub language: Language,
    /// Prefix for holiday image paths.
    pub asset_base: Option<String>,
    /// Default log level when `RUST_LOG` is unset.
    pub log_level: Option<String>,
}

impl Config {
    /// Read a configuration file.  A relative `dataset` path is taken
    /// relative to the file's directory.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        if let (Some(dataset), Some(dir)) = (&config.dataset, path.parent()) {
            if dataset.is_relative() {
                config.dataset = Some(dir.join(dataset));
            }
        }
        Ok(config)
    }

    /// The configured holiday dataset, or the built-in one.
    pub fn holiday_set(&self) -> Result<HolidaySet, ConfigError> {
        match &self.dataset {
            Some(path) => Ok(HolidaySet::load(path)?),
            None => Ok(HolidaySet::builtin()),
        }
    }

    /// An engine over the configured dataset.
    pub fn engine(&self) -> Result<CalendarEngine, ConfigError> {
        Ok(CalendarEngine::new(Arc::new(self.holiday_set()?)))
    }

    /// A JSON API with the configured language and asset base.
    pub fn api(&self) -> Result<Api, ConfigError> {
        let mut api = Api::new(self.engine()?).with_language(self.language);
        if let Some(base) = &self.asset_base {
            api = api.with_asset_base(base.clone());
        }
        Ok(api)
    }
}

/// Candidate configuration files, most specific first.
pub fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();
    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }
    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("ethcal").join("config.toml"));
    }
    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".ethcal.toml"));
    }
    locations
}

/// Load `explicit` if given, else the first existing file among
/// [`find_configfile_locations`], else the defaults.
pub fn load_suitable_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return Config::load(path);
    }
    for path in find_configfile_locations() {
        if path.is_file() {
            log::debug!("using config file {}", path.display());
            return Config::load(&path);
        }
    }
    log::debug!("no config file found, using defaults");
    Ok(Config::default())
}
