//! User settings persisted as JSON in the platform config directory.
//!
//! Loading is forgiving: a missing or corrupt settings file falls back
//! to defaults with a warning, never an abort. The file is watched for
//! external edits by [`crate::settings_watcher`].

use crate::types::ThemeMode;
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name shown in the home-screen greeting.
    pub display_name: String,
    pub theme_mode: ThemeMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_name: "Satyam".to_string(),
            theme_mode: ThemeMode::Light,
        }
    }
}

/// Path to the settings file, if a config directory exists on this
/// platform.
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("budgetboard").join("settings.json"))
}

impl Settings {
    /// Load from the default location, falling back to defaults on any
    /// failure.
    pub fn load() -> Self {
        let Some(path) = settings_path() else {
            tracing::warn!("no config directory available, using default settings");
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "settings unavailable, using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("parsing settings at {}", path.display()))
    }

    /// Save to the default location.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = settings_path().context("no config directory available")?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("writing settings to {}", path.display()))
    }
}
