//! Where a settings document comes from and how it is decoded.

use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::error::{LoadError, Result};

/// Encoding of a settings document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.yml` / `.yaml` files are YAML; everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("yml") || e.eq_ignore_ascii_case("yaml"))
            .unwrap_or(false);

        if is_yaml {
            DocumentFormat::Yaml
        } else {
            DocumentFormat::Json
        }
    }

    /// Decode text into a generic document tree.
    pub fn parse(self, contents: &str) -> Result<Value> {
        match self {
            DocumentFormat::Json => Ok(serde_json::from_str(contents)?),
            DocumentFormat::Yaml => Ok(serde_yaml::from_str(contents)?),
        }
    }
}

/// A settings document to load.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsSource {
    /// A file on disk; the format follows the extension.
    File(PathBuf),
    /// In-memory text in a known format.
    Text {
        contents: String,
        format: DocumentFormat,
    },
    /// An already-decoded document.
    Document(Value),
}

impl SettingsSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        SettingsSource::File(path.into())
    }

    pub fn json(contents: impl Into<String>) -> Self {
        SettingsSource::Text {
            contents: contents.into(),
            format: DocumentFormat::Json,
        }
    }

    pub fn yaml(contents: impl Into<String>) -> Self {
        SettingsSource::Text {
            contents: contents.into(),
            format: DocumentFormat::Yaml,
        }
    }

    /// The backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            SettingsSource::File(path) => Some(path),
            _ => None,
        }
    }

    /// Short description used in diagnostics.
    pub fn label(&self) -> String {
        match self {
            SettingsSource::File(path) => path.display().to_string(),
            SettingsSource::Text {
                format: DocumentFormat::Json,
                ..
            } => "<inline json>".to_string(),
            SettingsSource::Text {
                format: DocumentFormat::Yaml,
                ..
            } => "<inline yaml>".to_string(),
            SettingsSource::Document(_) => "<document>".to_string(),
        }
    }

    /// Read and decode the document.
    pub(super) fn read(&self) -> Result<Cow<'_, Value>> {
        match self {
            SettingsSource::File(path) => {
                let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
                    ErrorKind::NotFound => LoadError::NotFound(path.clone()),
                    _ => LoadError::Io(e),
                })?;
                DocumentFormat::from_path(path).parse(&contents).map(Cow::Owned)
            }
            SettingsSource::Text { contents, format } => format.parse(contents).map(Cow::Owned),
            SettingsSource::Document(value) => Ok(Cow::Borrowed(value)),
        }
    }
}
