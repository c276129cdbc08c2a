//! Shared reference to the current settings snapshot.

use std::sync::{Arc, PoisonError, RwLock};

use crate::schema::RoutingSettings;

use super::core::SettingsLoader;
use super::source::SettingsSource;

/// Slot holding the active [`RoutingSettings`] snapshot.
///
/// Readers take an `Arc` to the current snapshot and route against it
/// without holding any lock. Writers replace the whole snapshot, so a
/// routing decision never sees a half-updated one. Clones share the slot.
#[derive(Debug, Clone)]
pub struct SettingsHandle {
    current: Arc<RwLock<Arc<RoutingSettings>>>,
}

impl SettingsHandle {
    pub fn new(settings: RoutingSettings) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(settings))),
        }
    }

    /// The active snapshot.
    pub fn current(&self) -> Arc<RoutingSettings> {
        // The slot only ever holds a complete snapshot, so a poisoned lock is still consistent.
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Swap in a new snapshot, returning the one it replaced.
    pub fn replace(&self, settings: RoutingSettings) -> Arc<RoutingSettings> {
        let next = Arc::new(settings);
        let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *slot, next)
    }

    /// Load `source` and swap the result in.
    pub fn reload(&self, loader: &SettingsLoader, source: &SettingsSource) -> Arc<RoutingSettings> {
        let settings = loader.load(source);
        self.replace(settings);
        self.current()
    }
}

impl Default for SettingsHandle {
    fn default() -> Self {
        Self::new(RoutingSettings::default())
    }
}
