use crate::theme::ThemeMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeMode,
    pub chord_timeout_ms: u64,
    pub hud_duration_ms: u64,
    pub island_duration_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            chord_timeout_ms: 500,
            hud_duration_ms: 1500,
            island_duration_ms: 3000,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn chord_timeout(&self) -> Duration {
        Duration::from_millis(self.chord_timeout_ms)
    }

    #[must_use]
    pub fn hud_duration(&self) -> Duration {
        Duration::from_millis(self.hud_duration_ms)
    }

    #[must_use]
    pub fn island_duration(&self) -> Duration {
        Duration::from_millis(self.island_duration_ms)
    }
}

fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("ro0m");
        path
    })
}

pub fn get_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.toml"))
}

pub fn get_log_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("RO0M_LOG_FILE") {
        return Some(PathBuf::from(path));
    }
    config_dir().map(|dir| dir.join("ro0m.log"))
}

/// Reads settings, falling back to defaults when the file is missing or unreadable.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }
    match std::fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|content| toml::from_str::<Settings>(&content).map_err(Into::into))
    {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings");
            Settings::default()
        }
    }
}

pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let content = toml::to_string(settings)?;
    std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
