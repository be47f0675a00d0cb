use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{
    currency::{DEFAULT_GROUPING_SEPARATOR, DEFAULT_SYMBOL},
    errors::Result,
    utils::persistence::{app_data_dir, ensure_dir, load_json, save_json},
};

const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const DATA_FILE: &str = "expenses.json";

/// User preferences for display and local storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_grouping_separator")]
    pub grouping_separator: char,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom expense file. Defaults to `<data dir>/expenses.json`.
    pub data_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            grouping_separator: Self::default_grouping_separator(),
            data_file: None,
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        DEFAULT_SYMBOL.into()
    }

    pub fn default_grouping_separator() -> char {
        DEFAULT_GROUPING_SEPARATOR
    }

    pub fn resolve_data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| app_data_dir().join(DATA_FILE))
    }
}

/// Loads and saves [`Config`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn new_default() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        let config_dir = base.join(CONFIG_DIR);
        ensure_dir(&config_dir)?;
        Ok(Self::new(config_dir.join(CONFIG_FILE)))
    }

    /// Returns defaults when no config has been saved yet.
    pub fn load(&self) -> Result<Config> {
        let config = load_json(&self.path)?.unwrap_or_default();
        tracing::debug!(path = %self.path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        save_json(config, &self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
