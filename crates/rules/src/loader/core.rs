//! Core [`SettingsLoader`]: document to snapshot, never failing the caller.

use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::diagnostics::{DiagnosticEvent, DiagnosticSink, TracingSink};
use crate::schema::{RoutingSettings, WaveId, DEFAULT_WAVE};

use super::entry::{build_rule, truthy, value_kind};
use super::error::{LoadError, Result};
use super::source::SettingsSource;

/// Builds [`RoutingSettings`] snapshots from settings documents.
///
/// The settings location is always passed in; the loader holds no path and
/// no state between calls. Diagnostics go to the injected sink
/// ([`TracingSink`] unless replaced).
#[derive(Clone)]
pub struct SettingsLoader {
    /// Wave used when the document names none, and in the disabled default.
    fallback_wave: WaveId,
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SettingsLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsLoader")
            .field("fallback_wave", &self.fallback_wave)
            .finish_non_exhaustive()
    }
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self {
            fallback_wave: WaveId::from(DEFAULT_WAVE),
            sink: Arc::new(TracingSink),
        }
    }

    /// Override the fallback wave (`"HAPPY ALERT"` by default).
    pub fn with_fallback_wave(mut self, wave: impl Into<WaveId>) -> Self {
        self.fallback_wave = wave.into();
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn fallback_wave(&self) -> &WaveId {
        &self.fallback_wave
    }

    pub fn sink(&self) -> &dyn DiagnosticSink {
        self.sink.as_ref()
    }

    /// Load a snapshot. Total: any failure yields the disabled default.
    pub fn load(&self, source: &SettingsSource) -> RoutingSettings {
        self.try_load(source)
            .unwrap_or_else(|e| self.degrade(source, e))
    }

    /// Load a snapshot from a file path.
    pub fn load_file(&self, path: impl AsRef<Path>) -> RoutingSettings {
        self.load(&SettingsSource::file(path.as_ref()))
    }

    /// Load a snapshot, reporting document-level failures to the caller.
    ///
    /// Entry-level problems are still absorbed: malformed rules are skipped
    /// and recorded, never returned as errors.
    pub fn try_load(&self, source: &SettingsSource) -> Result<RoutingSettings> {
        let document = source.read()?;
        let settings = self.interpret(&document)?;

        self.sink.record(&DiagnosticEvent::SettingsLoaded {
            source: source.label(),
            enabled: settings.enabled(),
            default_wave: settings.default_wave().clone(),
            rules: settings.rules().len(),
        });
        Ok(settings)
    }

    /// Record a load failure and return the disabled default.
    pub(super) fn degrade(&self, source: &SettingsSource, error: LoadError) -> RoutingSettings {
        let event = match error {
            LoadError::NotFound(_) => DiagnosticEvent::SettingsMissing {
                source: source.label(),
            },
            other => DiagnosticEvent::DocumentRejected {
                source: source.label(),
                reason: other.to_string(),
            },
        };
        self.sink.record(&event);
        RoutingSettings::disabled(self.fallback_wave.clone())
    }

    /// Turn a decoded document into a snapshot.
    fn interpret(&self, document: &Value) -> Result<RoutingSettings> {
        let empty = Map::new();

        let root = match document {
            Value::Object(map) => map,
            Value::Null => &empty,
            other => {
                return Err(LoadError::Malformed(format!(
                    "expected a mapping at the top level, found {}",
                    value_kind(other)
                )))
            }
        };

        // Any falsy value stands in for an empty block.
        let notifications = match root.get("notifications") {
            None => &empty,
            Some(Value::Object(map)) => map,
            Some(other) if !truthy(other) => &empty,
            Some(other) => {
                return Err(LoadError::Malformed(format!(
                    "'notifications' must be a mapping, found {}",
                    value_kind(other)
                )))
            }
        };

        // A notifications block without `enabled` counts as opted in.
        let enabled = notifications.get("enabled").map(truthy).unwrap_or(true);

        let default_wave = match notifications.get("default_wave") {
            None | Some(Value::Null) => self.fallback_wave.clone(),
            Some(Value::String(s)) if s.is_empty() => self.fallback_wave.clone(),
            Some(Value::String(s)) => WaveId::from(s.as_str()),
            Some(other) => {
                self.sink.record(&DiagnosticEvent::DefaultWaveInvalid {
                    found: value_kind(other),
                });
                self.fallback_wave.clone()
            }
        };

        let entries: &[Value] = match notifications.get("custom") {
            None | Some(Value::Null) => &[],
            Some(Value::Array(items)) => items.as_slice(),
            Some(other) => {
                self.sink.record(&DiagnosticEvent::CustomNotASequence {
                    found: value_kind(other),
                });
                &[]
            }
        };

        let mut rules = Vec::with_capacity(entries.len());
        for (index, item) in entries.iter().enumerate() {
            match build_rule(index, item, &default_wave) {
                Ok(rule) => {
                    for (field, pattern) in rule.patterns() {
                        if let Some(reason) = pattern.error() {
                            self.sink.record(&DiagnosticEvent::InvalidPattern {
                                index,
                                field,
                                pattern: pattern.source().to_string(),
                                reason: reason.to_string(),
                            });
                        }
                    }
                    rules.push(rule);
                }
                Err(e) => {
                    self.sink.record(&DiagnosticEvent::EntrySkipped {
                        index,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(RoutingSettings::new(enabled, default_wave, rules))
    }
}
