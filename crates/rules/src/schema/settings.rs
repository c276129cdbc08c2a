//! The routing settings snapshot.

use serde::Serialize;

use super::{Rule, WaveId, DEFAULT_WAVE};

/// Immutable, fully-resolved routing configuration produced by one load.
///
/// Hosts that reload configuration replace the whole snapshot (see
/// [`SettingsHandle`](crate::loader::SettingsHandle)); a snapshot is never
/// patched in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingSettings {
    enabled: bool,
    default_wave: WaveId,
    rules: Vec<Rule>,
}

impl RoutingSettings {
    pub fn new(enabled: bool, default_wave: impl Into<WaveId>, rules: Vec<Rule>) -> Self {
        Self {
            enabled,
            default_wave: default_wave.into(),
            rules,
        }
    }

    /// Routing switched off with no rules: the state used when no usable
    /// settings document exists.
    pub fn disabled(fallback_wave: impl Into<WaveId>) -> Self {
        Self::new(false, fallback_wave, Vec::new())
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn default_wave(&self) -> &WaveId {
        &self.default_wave
    }

    /// Rules in priority order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self::disabled(DEFAULT_WAVE)
    }
}
