//! Branding and user preferences
//!
//! Both are explicit configuration values loaded once at startup and
//! read-only afterwards; nothing reads them ambiently. Missing or malformed
//! files degrade to defaults.

use crate::view::Precision;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Color scheme for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
}

impl ColorScheme {
    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Dark => ColorScheme::Light,
            ColorScheme::Light => ColorScheme::Dark,
        }
    }
}

/// White-label branding shown in the sidebar header and CLI output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    pub app_name: String,
    pub tagline: String,
    /// Path or URL of the logo asset; unused by the TUI, kept for parity
    /// with the mobile/web clients.
    #[serde(default)]
    pub logo: Option<String>,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            app_name: "CoachBoard".to_string(),
            tagline: "Fitness coaching administration".to_string(),
            logo: None,
        }
    }
}

impl Branding {
    /// Load branding from `<config_dir>/branding.json`; defaults on any
    /// read or parse error.
    pub fn load(config_dir: &Path) -> Self {
        let path = config_dir.join("branding.json");
        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}

/// UI preferences persisted between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub color_scheme: ColorScheme,
    /// Rounding for percentage stats; pages may override.
    #[serde(default)]
    pub stat_precision: Precision,
}

impl Preferences {
    /// Load preferences from `<config_dir>/preferences.json`.
    /// Returns defaults on any I/O or parse error (graceful degradation).
    pub fn load(config_dir: &Path) -> Self {
        let path = config_dir.join("preferences.json");
        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Persist preferences to `<config_dir>/preferences.json`.
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(config_dir)
            .context("Failed to create config directory for preferences")?;
        let path = config_dir.join("preferences.json");
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize preferences")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write preferences to {}", path.display()))
    }
}

/// Everything configurable, resolved once at startup.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub branding: Branding,
    pub preferences: Preferences,
}

impl AppConfig {
    /// Resolve from the platform config directory
    /// (`~/.config/coachboard` on Linux). Defaults when the directory
    /// cannot be determined.
    pub fn load() -> Self {
        match config_dir() {
            Some(dir) => Self::load_from(&dir),
            None => {
                debug!("no platform config directory, using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(dir: &Path) -> Self {
        Self {
            branding: Branding::load(dir),
            preferences: Preferences::load(dir),
        }
    }
}

/// Platform config directory for coachboard.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("coachboard"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_when_files_missing() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(dir.path());
        assert_eq!(config.branding.app_name, "CoachBoard");
        assert_eq!(config.preferences.color_scheme, ColorScheme::Dark);
    }

    #[test]
    fn test_preferences_round_trip() {
        let dir = tempdir().unwrap();
        let prefs = Preferences {
            color_scheme: ColorScheme::Light,
            stat_precision: Precision::OneDecimal,
        };
        prefs.save(dir.path()).unwrap();

        let loaded = Preferences::load(dir.path());
        assert_eq!(loaded.color_scheme, ColorScheme::Light);
        assert_eq!(loaded.stat_precision, Precision::OneDecimal);
    }

    #[test]
    fn test_malformed_file_degrades_to_default() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("preferences.json"), "{not json").unwrap();
        let loaded = Preferences::load(dir.path());
        assert_eq!(loaded.color_scheme, ColorScheme::Dark);
    }

    #[test]
    fn test_branding_from_file() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("branding.json"),
            r#"{"appName": "IronCoach", "tagline": "Train harder", "logo": "/assets/iron.png"}"#,
        )
        .unwrap();
        let branding = Branding::load(dir.path());
        assert_eq!(branding.app_name, "IronCoach");
        assert_eq!(branding.logo.as_deref(), Some("/assets/iron.png"));
    }

    #[test]
    fn test_color_scheme_toggle() {
        assert_eq!(ColorScheme::Dark.toggled(), ColorScheme::Light);
        assert_eq!(ColorScheme::Light.toggled(), ColorScheme::Dark);
    }
}
