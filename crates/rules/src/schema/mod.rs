//! Settings schema: the immutable snapshot the router evaluates.
//!
//! - `WaveId`: symbolic waveform identifier
//! - `FieldPattern`: a per-field glob compiled once at load time
//! - `Rule`: one user-defined routing entry (three patterns and a wave)
//! - `RoutingSettings`: enabled flag, default wave and ordered rules
//! - `Notification`: the `(app_name, summary, body)` triple being routed

mod notification;
mod pattern;
mod rule;
mod settings;
mod wave;

pub use notification::*;
pub use pattern::*;
pub use rule::*;
pub use settings::*;
pub use wave::*;
