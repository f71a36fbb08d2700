use crate::branch::{CheckPool, MAX_WORKERS};
use crate::error::{AxeError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The base config directory name under ~/.config/
const CONFIG_DIR_NAME: &str = "axe";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 30;

/// User settings for axe.
///
/// Every field is optional in the file; missing fields take their defaults.
///
/// # Example
///
/// ```toml
/// # Concurrent `gh` lookups (1-10)
/// max_workers = 10
///
/// # Seconds before a single `gh` call is abandoned; 0 disables the limit
/// lookup_timeout_secs = 30
///
/// # Colored output (overridden by --no-color and NO_COLOR)
/// color = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Upper bound on concurrent PR lookups. Clamped to `1..=10`.
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,

    /// Per-lookup timeout in seconds. `0` means wait forever.
    #[serde(default = "default_lookup_timeout_secs")]
    pub lookup_timeout_secs: u64,

    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_max_workers() -> usize {
    MAX_WORKERS
}

fn default_lookup_timeout_secs() -> u64 {
    DEFAULT_LOOKUP_TIMEOUT_SECS
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_workers: MAX_WORKERS,
            lookup_timeout_secs: DEFAULT_LOOKUP_TIMEOUT_SECS,
            color: true,
        }
    }
}

impl Config {
    pub fn lookup_timeout(&self) -> Option<Duration> {
        match self.lookup_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn check_pool(&self) -> CheckPool {
        CheckPool::new(self.max_workers)
    }
}

/// Get the axe config directory path (~/.config/axe).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| AxeError::Config("Could not determine home directory".to_string()))?;
    Ok(home.join(".config").join(CONFIG_DIR_NAME))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILENAME))
}

/// Load `~/.config/axe/config.toml`, or defaults if it does not exist.
pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

/// Load configuration from `path`, or defaults if the file does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not valid TOML.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content).map_err(|e| {
        AxeError::Config(format!(
            "Failed to parse config file at {:?}: {}",
            path, e
        ))
    })?;
    log::debug!("loaded config from {}", path.display());

    Ok(config)
}
