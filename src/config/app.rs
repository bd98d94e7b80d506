use super::defaults::*;
use crate::consts::{BACKEND_ENV, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use crate::enums::BackendPreference;
use crate::error::RunnerError;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_driver")]
    pub driver: Driver,
    #[serde(default = "default_pragmas")]
    pub pragmas: Pragmas,
    #[serde(default = "default_logging")]
    pub logging: Logging,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Driver {
    #[serde(default)]
    pub backend: BackendPreference,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pragmas {
    /// Empty string disables the cipher-selection directive
    #[serde(default = "default_cipher")]
    pub cipher: String,
    #[serde(default = "default_journal_mode")]
    pub journal_mode: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Logging {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            driver: default_driver(),
            pragmas: default_pragmas(),
            logging: default_logging(),
        }
    }
}

impl Config {
    /// Read and parse one TOML file
    pub fn from_path(path: &Path) -> Result<Self, RunnerError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RunnerError::Config(format!("{}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| RunnerError::Config(format!("{}: {e}", path.display())))
    }

    /// Apply `DB_RUNNER_BACKEND` if it names a known backend
    pub fn apply_backend_override(&mut self, value: Option<&str>) {
        let Some(value) = value else { return };
        match BackendPreference::from_name(value) {
            Some(pref) => self.driver.backend = pref,
            None => eprintln!("Warning: {BACKEND_ENV}={value:?} is not a known backend, ignoring"),
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at runtime; falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let path = Path::new(&config_path);

        let mut conf = if path.exists() {
            Config::from_path(path).unwrap_or_else(|err| {
                eprintln!("Warning: {err}, using built-in defaults");
                Config::default()
            })
        } else {
            Config::default()
        };

        conf.apply_backend_override(std::env::var(BACKEND_ENV).ok().as_deref());
        conf
    })
}
