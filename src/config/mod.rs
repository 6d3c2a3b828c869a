// SPDX-License-Identifier: MPL-2.0
//! Loading and saving the plugin-wide alert defaults.
//!
//! The defaults live in the `[alert]` table of `alerts.toml`:
//!
//! ```toml
//! [alert]
//! position = "bottom-right"
//! severity = "warning"
//! auto_hide_delay_ms = 8000
//! theme = "basic"
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use alert_stack::config::{self, Config};
//! use alert_stack::domain::alert::Position;
//!
//! let (mut config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("using built-in defaults: {key}");
//! }
//!
//! config.alert.position = Some(Position::BottomLeft);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ui::alerts::AlertOverrides;

pub use paths::ENV_CONFIG_DIR;

const CONFIG_FILE: &str = "alerts.toml";

/// Warning key returned by [`load`] when the file exists but cannot be used.
pub const LOAD_ERROR_KEY: &str = "alert-config-load-error";

/// Persisted configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Plugin-wide defaults applied to every alert.
    #[serde(default)]
    pub alert: AlertOverrides,
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional warning key). A missing file is not
/// an error; an unreadable or malformed one yields the built-in defaults
/// and [`LOAD_ERROR_KEY`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("ignoring {}: {}", path.display(), err);
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
