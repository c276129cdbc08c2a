//! Filesystem watcher that hot-reloads the settings snapshot.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::event::ModifyKind;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use crate::diagnostics::DiagnosticEvent;

use super::core::SettingsLoader;
use super::error::{LoadError, WatchError};
use super::handle::SettingsHandle;
use super::source::SettingsSource;

/// Reloads a settings file into a [`SettingsHandle`] whenever it changes.
///
/// Watches the file's parent directory so that editors which save by
/// writing a temp file and renaming it over the original are picked up.
/// - Create / modify / rename: the file is reloaded and swapped in. A
///   malformed document is reported and the previous snapshot kept.
/// - Removal: the disabled default is swapped in, as for a missing file.
///
/// Watching stops when the `SettingsWatcher` is dropped.
pub struct SettingsWatcher {
    path: PathBuf,
    /// Active filesystem watcher (held to keep it alive).
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    /// Start watching `path`, publishing snapshots into `handle`.
    pub fn spawn(
        path: impl AsRef<Path>,
        loader: Arc<SettingsLoader>,
        handle: SettingsHandle,
    ) -> Result<Self, WatchError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(OsStr::to_os_string)
            .ok_or_else(|| WatchError::NoFileName(path.to_path_buf()))?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let dir = fs::canonicalize(&dir)?;
        let target = dir.join(&file_name);
        let source = SettingsSource::file(&target);
        let started = DiagnosticEvent::WatchStarted {
            path: target.display().to_string(),
        };
        let reporter = Arc::clone(&loader);

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) => handle_fs_event(&event, &file_name, &source, &loader, &handle),
            Err(e) => loader.sink().record(&DiagnosticEvent::WatcherFailed {
                path: source.label(),
                reason: e.to_string(),
            }),
        })?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        let _ = watcher.configure(notify::Config::default().with_poll_interval(Duration::from_millis(500)));

        reporter.sink().record(&started);
        Ok(Self {
            path: target,
            _watcher: watcher,
        })
    }

    /// Resolved path of the watched settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Handle a single filesystem event from the notify watcher.
pub(super) fn handle_fs_event(
    event: &Event,
    file_name: &OsString,
    source: &SettingsSource,
    loader: &SettingsLoader,
    handle: &SettingsHandle,
) {
    let relevant_kind = match &event.kind {
        EventKind::Create(_) | EventKind::Remove(_) => true,
        EventKind::Modify(ModifyKind::Metadata(_)) => false,
        EventKind::Modify(_) => true,
        _ => false,
    };
    let touches_settings = event
        .paths
        .iter()
        .any(|p| p.file_name() == Some(file_name.as_os_str()));

    if !relevant_kind || !touches_settings {
        return;
    }

    // The file's current state decides, whatever the event said.
    match loader.try_load(source) {
        Ok(settings) => {
            handle.replace(settings);
        }
        Err(e @ LoadError::NotFound(_)) => {
            handle.replace(loader.degrade(source, e));
        }
        Err(e) => {
            loader.sink().record(&DiagnosticEvent::ReloadRejected {
                source: source.label(),
                reason: e.to_string(),
            });
        }
    }
}
