//! Config store and persistence
//!
//! `ConfigStore` hands out immutable snapshots. A frame takes one snapshot up
//! front and draws with it; edits clone the current config, change the clone
//! and swap it in, so a frame in flight never sees a half-applied edit even if
//! the settings editor runs on another thread.

use super::types::*;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// Errors that can occur while loading or saving the configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("unsupported config version {found} (newest supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
    #[error("no per-user config directory on this platform")]
    NoConfigDir,
}

/// Where the config lives unless told otherwise: `<config dir>/job-hud/config.json`
pub fn default_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("job-hud").join("config.json"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Loads the config at `path`.
///
/// A missing file yields the defaults. A file that can't be parsed is moved
/// aside (`config.corrupt-<timestamp>.json`) and the defaults are used, so a
/// bad edit never keeps the HUD from starting.
pub fn load_or_default(path: &Path) -> Result<HudConfig, ConfigError> {
    if !path.exists() {
        info!("No config at {}, using defaults", path.display());
        return Ok(HudConfig::default());
    }

    // Read raw bytes: bad encoding is handled like any other unparsable file
    let bytes = fs::read(path)?;
    let config: HudConfig = match serde_json::from_slice(&bytes) {
        Ok(config) => config,
        Err(err) => {
            let backup = backup_path(path);
            fs::rename(path, &backup)?;
            warn!(
                "Config {} is unreadable ({}); moved to {} and using defaults",
                path.display(),
                err,
                backup.display()
            );
            return Ok(HudConfig::default());
        }
    };

    if config.version > CURRENT_CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            found: config.version,
            supported: CURRENT_CONFIG_VERSION,
        });
    }

    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Writes `config` as pretty JSON, creating parent directories as needed
pub fn save(path: &Path, config: &HudConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;

    info!("Config saved to {}", path.display());
    Ok(())
}

fn backup_path(path: &Path) -> PathBuf {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("config");
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    path.with_file_name(format!("{stem}.corrupt-{timestamp}.json"))
}

/// Copy-on-write holder of the live configuration
#[derive(Debug)]
pub struct ConfigStore {
    current: RwLock<Arc<HudConfig>>,
    path: Option<PathBuf>,
}

impl ConfigStore {
    /// Store that never touches the disk
    pub fn in_memory(config: HudConfig) -> Self {
        ConfigStore {
            current: RwLock::new(Arc::new(config)),
            path: None,
        }
    }

    /// Store backed by the file at `path` (see [`load_or_default`])
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();
        let config = load_or_default(&path)?;
        Ok(ConfigStore {
            current: RwLock::new(Arc::new(config)),
            path: Some(path),
        })
    }

    /// The config as of now. Cheap; take one per frame.
    pub fn snapshot(&self) -> Arc<HudConfig> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Applies `edit` to a copy of the current config and publishes it
    pub fn update<F>(&self, edit: F) -> Arc<HudConfig>
    where
        F: FnOnce(&mut HudConfig),
    {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = HudConfig::clone(&current);
        edit(&mut next);
        *current = Arc::new(next);
        Arc::clone(&current)
    }

    /// Persists the current config. In-memory stores report `Ok(None)`.
    pub fn save(&self) -> Result<Option<&Path>, ConfigError> {
        match &self.path {
            Some(path) => {
                save(path, &self.snapshot())?;
                Ok(Some(path))
            }
            None => Ok(None),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        ConfigStore::in_memory(HudConfig::default())
    }
}
