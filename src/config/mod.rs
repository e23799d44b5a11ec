//! HUD configuration
//!
//! # Architecture
//!
//! - `types`: serde data (colour maps, layout constants, per-job overrides)
//! - `manager`: [`ConfigStore`] snapshots plus JSON load/save
//!
//! # Example Usage
//!
//! ```ignore
//! let store = ConfigStore::open(config::default_path()?)?;
//!
//! // Once per frame
//! let config = store.snapshot();
//!
//! // From the settings editor
//! store.update(|config| config.hide_hud = true);
//! store.save()?;
//! ```

pub mod manager;
pub mod types;

pub use manager::{ConfigError, ConfigStore, default_path, load_or_default};
pub use types::*;
