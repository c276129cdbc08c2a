//! Catalog of waveform names a device is known to play.

use crate::schema::WaveId;

/// Waveforms offered by the settings editor and the cursor feedback extension.
pub const KNOWN_WAVES: &[&str] = &[
    "HAPPY ALERT",
    "MAD",
    "SHARP COLLISION",
    "FIREWORKS",
    "SOFT THUMP",
    "DAMP COLLISION",
    "DAMP STATE CHANGE",
];

/// Set of playable waveform names. Lookups ignore case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveCatalog {
    waves: Vec<WaveId>,
}

impl WaveCatalog {
    /// Build a catalog, e.g. from the choices a device reports.
    pub fn new<I, W>(waves: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<WaveId>,
    {
        Self {
            waves: waves.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, wave: &str) -> bool {
        self.resolve(wave).is_some()
    }

    /// The catalog's spelling of `wave`, if known.
    pub fn resolve(&self, wave: &str) -> Option<&WaveId> {
        self.waves
            .iter()
            .find(|known| known.as_str().eq_ignore_ascii_case(wave))
    }

    pub fn iter(&self) -> impl Iterator<Item = &WaveId> {
        self.waves.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.waves.iter().map(WaveId::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }
}

impl Default for WaveCatalog {
    fn default() -> Self {
        Self::new(KNOWN_WAVES.iter().copied())
    }
}
