//! Settings persistence
//!
//! Saves and loads [`GameSettings`] to/from a JSON file so preferences survive
//! between runs.
//!
//! # File Location
//!
//! `settings.json` in the user's configuration directory as reported by
//! [`ProjectDirs`], or in the working directory when no such directory can be
//! determined. The `--settings` flag overrides both.
//!
//! # Error Handling
//!
//! - [`load_settings`] never fails: a missing, unreadable or malformed file
//!   yields [`GameSettings::default`] and a warning
//! - [`save_settings`] reports failures to the caller as [`CoreError`]

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{info, warn};

use crate::core::{CoreError, CoreResult, GameSettings};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Default location of the settings file
///
/// E.g. `~/.config/boardgames/settings.json` on Linux. Falls back to a local
/// `settings.json` if the system config dir cannot be found.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "boardgames", "boardgames") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and parse the settings file at `path`
pub fn read_settings(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| CoreError::format(path, e))
}

/// Load settings from `path`, falling back to defaults
pub fn load_settings(path: &Path) -> GameSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return GameSettings::default();
    }

    match read_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            GameSettings::default()
        }
    }
}

/// Write `settings` to `path` as pretty JSON, creating the directory if needed
pub fn save_settings(path: &Path, settings: &GameSettings) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| CoreError::io(parent, e))?;
        }
    }

    let json = serde_json::to_string_pretty(settings).map_err(|e| CoreError::format(path, e))?;
    fs::write(path, json).map_err(|e| CoreError::io(path, e))?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
