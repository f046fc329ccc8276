//! Platform-specific paths for the preference documents.
//!
//! Both documents live in the user configuration directory:
//!
//! - **Plugin preferences** (`matiz.toml`): the preset list, current index,
//!   and the controlled-settings list.
//! - **Global preferences** (`preferences.toml`): the flat setting map a
//!   preset is applied into.
//!
//! On Linux that is `~/.config/matiz/`, on macOS
//! `~/Library/Application Support/matiz/`, on Windows `%APPDATA%\matiz\`.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Application name used for directory paths.
const APP_NAME: &str = "matiz";

/// File name of the plugin preferences document.
pub const PLUGIN_PREFS_FILENAME: &str = "matiz.toml";

/// File name of the global preferences document.
pub const GLOBAL_PREFS_FILENAME: &str = "preferences.toml";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Path of the plugin preferences document under the default directory.
pub fn plugin_prefs_path() -> PathBuf {
    plugin_prefs_in(&user_config_dir())
}

/// Path of the global preferences document under the default directory.
pub fn global_prefs_path() -> PathBuf {
    global_prefs_in(&user_config_dir())
}

/// Path of the plugin preferences document under `dir`.
pub fn plugin_prefs_in(dir: &Path) -> PathBuf {
    dir.join(PLUGIN_PREFS_FILENAME)
}

/// Path of the global preferences document under `dir`.
pub fn global_prefs_in(dir: &Path) -> PathBuf {
    dir.join(GLOBAL_PREFS_FILENAME)
}

/// Create the user configuration directory if needed and return it.
pub fn ensure_user_config_dir() -> Result<PathBuf, ConfigError> {
    let dir = user_config_dir();
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::create_dir(&dir, e))?;
    }
    Ok(dir)
}
