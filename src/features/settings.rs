//! Application settings
//!
//! Read-only JSON configuration. A missing file means defaults; a broken one
//! means defaults plus a warning. Nothing is ever written back.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::app::evasion::Side;
use crate::i18n::Language;

/// Application settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// UI language code ("en" or "zh")
    pub language: String,
    /// Wine-colored dark palette instead of blush
    pub dark_mode: bool,
    /// Sound effect settings
    pub sound: SoundSettings,
    /// Directory holding sound effects and the accepted-screen picture
    pub assets_dir: PathBuf,
    /// Slot the No control starts in
    pub initial_side: Side,
}

/// Sound effect settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SoundSettings {
    pub enabled: bool,
    /// Multiplier applied to every effect's default volume (0.0 to 1.0)
    pub master_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            dark_mode: false,
            sound: SoundSettings::default(),
            assets_dir: PathBuf::from("assets"),
            initial_side: Side::Right,
        }
    }
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            master_volume: 1.0,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "rosegift", "Rosegift")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the default file, or return defaults
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("Ignoring settings file: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Unknown codes fall back to English
    pub fn language(&self) -> Language {
        Language::all()
            .iter()
            .copied()
            .find(|lang| lang.code() == self.language)
            .unwrap_or_default()
    }

    pub fn theme(&self) -> iced::Theme {
        if self.dark_mode {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }

    /// Picture shown on the accepted screen
    pub fn picture_path(&self) -> PathBuf {
        self.assets_dir.join("stick-figures-rose.gif")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings.language(), Language::English);
        assert!(!settings.dark_mode);
        assert!(settings.sound.enabled);
        assert_eq!(settings.sound.master_volume, 1.0);
        assert_eq!(settings.assets_dir, PathBuf::from("assets"));
        assert_eq!(settings.initial_side, Side::Right);
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let settings = Settings::from_json(
            r#"{ "language": "zh", "sound": { "master_volume": 0.5 }, "initial_side": "left" }"#,
        )
        .unwrap();
        assert_eq!(settings.language(), Language::Chinese);
        assert!(settings.sound.enabled);
        assert_eq!(settings.sound.master_volume, 0.5);
        assert_eq!(settings.initial_side, Side::Left);
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let settings = Settings::from_json(r#"{ "language": "fr" }"#).unwrap();
        assert_eq!(settings.language(), Language::English);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{ "initial_side": "up" }"#).is_err());
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let path = std::env::temp_dir().join("rosegift-missing-settings.json");
        let err = Settings::load_from_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("rosegift-missing-settings.json"));
    }

    #[test]
    fn load_from_file_reads_json() {
        let path = std::env::temp_dir().join(format!(
            "rosegift-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "dark_mode": true, "assets_dir": "/srv/rose" }"#).unwrap();

        let settings = Settings::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(settings.dark_mode);
        assert_eq!(settings.theme(), iced::Theme::Dark);
        assert_eq!(
            settings.picture_path(),
            PathBuf::from("/srv/rose/stick-figures-rose.gif")
        );
    }
}
