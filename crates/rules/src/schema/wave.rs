//! Waveform identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Waveform used when neither the document nor the caller names one.
pub const DEFAULT_WAVE: &str = "HAPPY ALERT";

/// Symbolic name of a haptic waveform, e.g. `"HAPPY ALERT"`.
///
/// The router never interprets the name; it is handed to whatever plays
/// waveforms on the device.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaveId(String);

impl WaveId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for WaveId {
    fn default() -> Self {
        Self::new(DEFAULT_WAVE)
    }
}

impl fmt::Display for WaveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WaveId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WaveId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for WaveId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for WaveId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WaveId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
