//! Diagnostic events emitted while loading settings and routing notifications.
//!
//! Loading and routing never log directly. They report typed
//! [`DiagnosticEvent`]s to an injected [`DiagnosticSink`]; the default
//! [`TracingSink`] forwards them to `tracing`, [`NullSink`] drops them and
//! [`RecordingSink`] buffers them for inspection.

use std::sync::{Mutex, PoisonError};

use tracing::{debug, error, info, warn};

use crate::schema::WaveId;

/// Something worth reporting during a load or a routing decision.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEvent {
    /// No settings document exists. Routing is disabled, quietly.
    SettingsMissing { source: String },
    /// The document could not be read, parsed, or has the wrong shape.
    DocumentRejected { source: String, reason: String },
    /// `notifications.default_wave` is not a string; the fallback is used.
    DefaultWaveInvalid { found: &'static str },
    /// `notifications.custom` is not a sequence; no rules are loaded.
    CustomNotASequence { found: &'static str },
    /// One rule entry was malformed and skipped.
    EntrySkipped { index: usize, reason: String },
    /// A rule was kept but one of its patterns will never match.
    InvalidPattern {
        index: usize,
        field: &'static str,
        pattern: String,
        reason: String,
    },
    /// A snapshot was built.
    SettingsLoaded {
        source: String,
        enabled: bool,
        default_wave: WaveId,
        rules: usize,
    },
    /// A reload failed and the previous snapshot stays active.
    ReloadRejected { source: String, reason: String },
    /// Hot reload is active for the settings file at `path`.
    WatchStarted { path: String },
    /// The filesystem watcher reported an error; the snapshot is unchanged.
    WatcherFailed { path: String, reason: String },
    /// Routing is switched off; no wave is played.
    RoutingDisabled,
    /// Rule at `index` matched first.
    RuleMatched {
        index: usize,
        name: String,
        wave: WaveId,
    },
    /// No rule matched; the default wave is used.
    NoRuleMatched { default_wave: WaveId },
}

/// Receiver for [`DiagnosticEvent`]s.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, event: &DiagnosticEvent);
}

/// Forwards events to `tracing` with structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, event: &DiagnosticEvent) {
        match event {
            DiagnosticEvent::SettingsMissing { source } => {
                info!(source = %source, "no settings document found, notifications disabled");
            }
            DiagnosticEvent::DocumentRejected { source, reason } => {
                error!(source = %source, error = %reason, "failed to load settings, notifications disabled");
            }
            DiagnosticEvent::DefaultWaveInvalid { found } => {
                error!(found = %found, "notifications.default_wave is not a string, using fallback");
            }
            DiagnosticEvent::CustomNotASequence { found } => {
                error!(found = %found, "notifications.custom is not a list, ignoring custom rules");
            }
            DiagnosticEvent::EntrySkipped { index, reason } => {
                error!(index = index, error = %reason, "skipping malformed custom rule");
            }
            DiagnosticEvent::InvalidPattern {
                index,
                field,
                pattern,
                reason,
            } => {
                warn!(index = index, field = %field, pattern = %pattern, error = %reason, "rule pattern will never match");
            }
            DiagnosticEvent::SettingsLoaded {
                source,
                enabled,
                default_wave,
                rules,
            } => {
                info!(source = %source, enabled = enabled, default_wave = %default_wave, rules = rules, "loaded notification settings");
            }
            DiagnosticEvent::ReloadRejected { source, reason } => {
                warn!(source = %source, error = %reason, "failed to reload settings, keeping previous version");
            }
            DiagnosticEvent::WatchStarted { path } => {
                info!(path = %path, "watching settings file for changes");
            }
            DiagnosticEvent::WatcherFailed { path, reason } => {
                warn!(path = %path, error = %reason, "filesystem watcher error");
            }
            DiagnosticEvent::RoutingDisabled => {
                debug!("notifications disabled in settings, no wave");
            }
            DiagnosticEvent::RuleMatched { index, name, wave } => {
                debug!(index = index, rule = %name, wave = %wave, "rule matched");
            }
            DiagnosticEvent::NoRuleMatched { default_wave } => {
                debug!(wave = %default_wave, "no rule matched, using default wave");
            }
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&self, _event: &DiagnosticEvent) {}
}

/// Buffers events in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<DiagnosticEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, event: &DiagnosticEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.record(&DiagnosticEvent::RoutingDisabled);
        sink.record(&DiagnosticEvent::NoRuleMatched {
            default_wave: WaveId::from("MAD"),
        });

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], DiagnosticEvent::RoutingDisabled);
        assert!(matches!(events[1], DiagnosticEvent::NoRuleMatched { .. }));
    }

    #[test]
    fn drain_empties_the_buffer() {
        let sink = RecordingSink::new();
        sink.record(&DiagnosticEvent::RoutingDisabled);
        assert_eq!(sink.drain().len(), 1);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn tracing_and_null_sinks_accept_every_event() {
        let events = [
            DiagnosticEvent::SettingsMissing {
                source: "settings.json".to_string(),
            },
            DiagnosticEvent::EntrySkipped {
                index: 1,
                reason: "not a mapping".to_string(),
            },
            DiagnosticEvent::RuleMatched {
                index: 0,
                name: "chat".to_string(),
                wave: WaveId::from("KNOCK"),
            },
            DiagnosticEvent::WatcherFailed {
                path: "settings.json".to_string(),
                reason: "inotify limit reached".to_string(),
            },
        ];
        for event in &events {
            TracingSink.record(event);
            NullSink.record(event);
        }
    }
}
