//! Error types for settings loading and watching.

use std::path::PathBuf;

/// Why a settings document could not be turned into a snapshot.
///
/// [`SettingsLoader::load`](super::SettingsLoader::load) never returns these;
/// it degrades to the disabled default. They surface only through
/// [`SettingsLoader::try_load`](super::SettingsLoader::try_load).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The settings file does not exist.
    #[error("settings file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parse error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document parsed but has the wrong shape.
    #[error("Malformed document: {0}")]
    Malformed(String),
}

/// Result alias for loader operations.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Why a single `notifications.custom` entry was skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("expected a mapping, found {0}")]
    NotAMapping(&'static str),

    #[error("field '{field}' must be a string, found {found}")]
    FieldType {
        field: &'static str,
        found: &'static str,
    },
}

/// Errors starting a [`SettingsWatcher`](super::SettingsWatcher).
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    /// The settings path does not name a file.
    #[error("settings path has no file name: {}", .0.display())]
    NoFileName(PathBuf),

    /// The directory holding the settings file cannot be resolved.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Filesystem watcher error.
    #[error("Notify watcher error: {0}")]
    Notify(#[from] notify::Error),
}
