// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - `--config-dir` or a test directory
//! 2. **Environment variable** - `ALERT_STACK_CONFIG_DIR`
//! 3. **Platform default** - via `dirs`, with the app name appended
//!    - Linux: `~/.config/AlertStack/`
//!    - macOS: `~/Library/Application Support/AlertStack/`
//!    - Windows: `C:\Users\<User>\AppData\Roaming\AlertStack\`

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "AlertStack";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ALERT_STACK_CONFIG_DIR";

/// Returns the config directory for the default resolution order.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the config directory, preferring `override_path` when given.
///
/// Returns `None` only when the platform has no config directory.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
