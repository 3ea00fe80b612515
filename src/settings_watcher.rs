//! File watcher for settings hot-reload.
//!
//! Watches the settings file's parent directory (the file itself may not
//! exist yet) and forwards relevant events over an mpsc channel. The UI
//! thread drains the channel with a non-blocking `poll()` once per frame;
//! notify's callback runs on its own thread and only sends.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

/// Settings file change observed by the watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    Modified,
    Created,
    Deleted,
    Error(String),
}

/// Default path watched for settings changes.
pub fn default_settings_path() -> Option<PathBuf> {
    crate::settings::settings_path()
}

pub struct SettingsWatcher {
    rx: Receiver<SettingsEvent>,
    // Held to keep the watch alive
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    pub fn new(path: PathBuf) -> anyhow::Result<Self> {
        let (tx, rx) = channel();
        let file_name: Option<OsString> = path.file_name().map(|n| n.to_os_string());

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let event = match res {
                Ok(event) => event,
                Err(e) => {
                    let _ = tx.send(SettingsEvent::Error(e.to_string()));
                    return;
                }
            };
            // Only the settings file itself is interesting
            let ours = event.paths.iter().any(|p| {
                p.file_name().map(|n| n.to_os_string()) == file_name
            });
            if !ours {
                return;
            }
            let mapped = match event.kind {
                EventKind::Create(_) => Some(SettingsEvent::Created),
                EventKind::Modify(_) => Some(SettingsEvent::Modified),
                EventKind::Remove(_) => Some(SettingsEvent::Deleted),
                _ => None,
            };
            if let Some(mapped) = mapped {
                let _ = tx.send(mapped);
            }
        })?;

        let watch_dir = path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| path.clone());
        watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;

        Ok(Self {
            rx,
            _watcher: watcher,
        })
    }

    /// Non-blocking poll for the next pending event.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        self.rx.try_recv().ok()
    }
}
