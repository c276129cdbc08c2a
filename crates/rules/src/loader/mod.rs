//! Settings loader with snapshot hot-reload via `notify` watcher.
//!
//! Parses a JSON or YAML settings document into an immutable
//! [`RoutingSettings`](crate::schema::RoutingSettings) snapshot. Loading is
//! total: a missing or malformed document yields the disabled default, and a
//! malformed rule entry is skipped without aborting the load.
//! [`SettingsHandle`] holds the current snapshot for concurrent readers and
//! [`SettingsWatcher`] swaps it whenever the settings file changes.

mod core;
mod entry;
mod error;
mod handle;
mod source;
mod watcher;


pub use self::core::SettingsLoader;
pub use self::error::{EntryError, LoadError, Result, WatchError};
pub use self::handle::SettingsHandle;
pub use self::source::{DocumentFormat, SettingsSource};
pub use self::watcher::SettingsWatcher;
