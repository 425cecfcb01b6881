use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::mock::MockStore;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub employer_name: String,
    pub company: String,
    /// How long the simulated job submission takes.
    pub submit_delay_ms: u64,
    /// JSON file replacing the bundled mock conversations.
    pub mock_data: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            employer_name: "Dana Whitfield".into(),
            company: "Bright Path ABA".into(),
            submit_delay_ms: 1500,
            mock_data: None,
        }
    }
}

impl Settings {
    pub fn path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        Some(base.config_dir().join("caremarket.toml"))
    }

    /// Defaults when the file is missing or unreadable.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// The configured data file, or the bundled data if that fails to load.
    pub fn open_store(&self) -> MockStore {
        if let Some(path) = &self.mock_data {
            match MockStore::from_path(path) {
                Ok(store) => return store,
                Err(e) => log::warn!("Falling back to bundled data, {} failed: {}", path.display(), e),
            }
        }
        match MockStore::builtin() {
            Ok(store) => store,
            Err(e) => {
                log::error!("Bundled mock data is invalid: {e}");
                MockStore::empty()
            }
        }
    }
}
