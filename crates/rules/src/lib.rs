//! Rule-based routing of desktop notifications to haptic waveforms.
//!
//! This crate provides:
//! - A strongly-typed settings snapshot ([`RoutingSettings`]) built from a
//!   JSON or YAML document, tolerant of partial and malformed input
//! - First-match-wins routing of `(app_name, summary, body)` triples to a
//!   waveform identifier using case-insensitive glob patterns
//! - An injected diagnostic sink so routing stays a pure function
//! - Advisory validation against a catalog of known waveforms
//! - A shared snapshot handle with filesystem hot-reload via `notify`

pub mod diagnostics;
pub mod loader;
pub mod matcher;
pub mod schema;
pub mod validation;
pub mod waves;

pub use diagnostics::{DiagnosticEvent, DiagnosticSink, NullSink, RecordingSink, TracingSink};
pub use loader::{SettingsHandle, SettingsLoader, SettingsSource, SettingsWatcher};
pub use matcher::{match_field, select_wave, Router};
pub use schema::{FieldPattern, Notification, Rule, RoutingSettings, WaveId};
pub use waves::WaveCatalog;
