//! Preference persistence under the per-user config directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::controller::PreferenceStore;
use crate::theme::Theme;

/// File name used under the per-user config directory.
const PREFERENCES_FILE: &str = "preferences.json";

/// On-disk preference document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Preferences {
    theme: Theme,
}

/// File-backed preference store. Every failure path reads as "no
/// preference" or drops the write with a warning; the theme for the
/// running session is kept in memory by the controller either way.
pub struct PreferenceFile {
    path: Option<PathBuf>,
}

impl PreferenceFile {
    /// Store at the per-user preferences path. When no config directory
    /// can be resolved the store still constructs, with reads empty and
    /// writes dropped.
    pub fn default_location() -> Self {
        match preferences_path() {
            Ok(path) => Self { path: Some(path) },
            Err(err) => {
                tracing::warn!(error = %err, "preference storage unavailable");
                Self { path: None }
            }
        }
    }

    fn write(&self, theme: Theme) -> Result<()> {
        let path = self
            .path
            .as_deref()
            .ok_or_else(|| anyhow!("no preference path"))?;
        let contents = serde_json::to_string_pretty(&Preferences { theme })?;
        fs::write(path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }
}

impl PreferenceStore for PreferenceFile {
    fn get(&self) -> Option<Theme> {
        let path = self.path.as_deref()?;
        let contents = fs::read_to_string(path).ok()?;
        let prefs: Preferences = serde_json::from_str(&contents).ok()?;
        Some(prefs.theme)
    }

    fn set(&mut self, theme: Theme) {
        if let Err(err) = self.write(theme) {
            tracing::warn!(error = %err, "failed to save theme preference");
        }
    }
}

/// Build the preferences path and ensure the directory exists.
fn preferences_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("dev", "theme_toggle", "theme_toggle")
        .ok_or_else(|| anyhow!("cannot determine config directory"))?;
    let config_dir = proj_dirs.config_dir();
    fs::create_dir_all(config_dir)?;
    Ok(config_dir.join(PREFERENCES_FILE))
}
