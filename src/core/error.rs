//! Failures of the settings file
//!
//! Both variants carry the path that was being read or written, so a message
//! surfaced by `main` points the player at the file to fix or delete.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why the settings file could not be read or written
#[derive(Error, Debug)]
pub enum CoreError {
    /// The file or its directory could not be accessed
    #[error("cannot access settings file {}: {source}", path.display())]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file holds something other than a settings object
    #[error("settings file {} is not valid settings JSON: {source}", path.display())]
    SettingsFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CoreError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        CoreError::SettingsIo {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn format(path: &Path, source: serde_json::Error) -> Self {
        CoreError::SettingsFormat {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Outcome of a settings load or save
pub type CoreResult<T> = Result<T, CoreError>;
