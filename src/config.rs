//! Settings parser for the demo
//!
//! Reads `config.toml` from the user config dir (e.g.
//! `~/.config/termalert/config.toml` on Linux). Missing or broken files
//! fall back to defaults so the demo always starts.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use termalert_core::prelude::*;
use termalert_core::Idiom;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "termalert";

/// Demo settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Display profile overrides
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DisplaySettings {
    /// Interface idiom to present against: "phone" or "tablet"
    #[serde(default)]
    pub idiom: Idiom,
}

/// Event loop settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Poll timeout between animation ticks, in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Capture mouse presses for button hit-testing
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse: true,
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_true() -> bool {
    true
}

/// Path of the user-level config file, if this platform has a config dir.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the user config dir.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings() -> Settings {
    match config_path() {
        Some(path) => load_settings_from(&path),
        None => {
            debug!("No config dir on this platform, using defaults");
            Settings::default()
        }
    }
}

fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings_from(&temp.path().join("config.toml"));

        assert_eq!(settings.display.idiom, Idiom::Phone);
        assert_eq!(settings.ui.tick_rate_ms, 50);
        assert!(settings.ui.mouse);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");

        let config = r#"
[display]
idiom = "tablet"

[ui]
tick_rate_ms = 16
mouse = false
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings_from(&path);

        assert_eq!(settings.display.idiom, Idiom::Tablet);
        assert_eq!(settings.ui.tick_rate_ms, 16);
        assert!(!settings.ui.mouse);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        let settings = load_settings_from(&path);
        assert_eq!(settings.display.idiom, Idiom::Phone);
    }

    #[test]
    fn test_load_settings_partial_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[display]\nidiom = \"tablet\"\n").unwrap();

        let settings = load_settings_from(&path);
        assert_eq!(settings.display.idiom, Idiom::Tablet);
        assert_eq!(settings.ui.tick_rate_ms, 50);
        assert!(settings.ui.mouse);
    }
}
