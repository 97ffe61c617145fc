//! Configuration management

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

pub const SAMPLE_TRAILER: &str =
    "https://interactive-examples.mdn.mozilla.net/media/cc0-videos/flower.mp4";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory or http(s) base URL holding `<id>.jpg` / `<id>-backdrop.jpg`
    #[serde(default = "default_covers_source")]
    pub covers_source: String,
    /// Player command; empty means ffplay
    #[serde(default)]
    pub external_player: String,
    #[serde(default = "default_trailer_url")]
    pub trailer_url: String,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
}

fn default_covers_source() -> String { "covers".to_string() }
fn default_trailer_url() -> String { SAMPLE_TRAILER.to_string() }
fn default_font_size() -> u32 { 14 }

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            covers_source: default_covers_source(),
            external_player: String::new(),
            trailer_url: default_trailer_url(),
            font_size: default_font_size(),
        }
    }
}

impl AppConfig {
    fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("kinoflow");
        fs::create_dir_all(&path).ok();
        path.push("config.json");
        path
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = fs::read_to_string(path) {
                match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => warn!(path = %path.display(), error = %e, "config malformed, using defaults"),
                }
            }
        }

        Self::default()
    }

    pub fn save(&self) {
        self.save_to(&Self::config_path());
    }

    pub fn save_to(&self, path: &Path) {
        if let Ok(content) = serde_json::to_string_pretty(self) {
            if let Err(e) = fs::write(path, content) {
                warn!(path = %path.display(), error = %e, "failed to save config");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"external_player": "mpv"}"#).unwrap();
        assert_eq!(config.external_player, "mpv");
        assert_eq!(config.covers_source, "covers");
        assert_eq!(config.trailer_url, SAMPLE_TRAILER);
        assert_eq!(config.font_size, 14);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = AppConfig {
            covers_source: "https://cdn.example.com/covers".to_string(),
            font_size: 16,
            ..AppConfig::default()
        };
        config.save_to(&path);

        assert_eq!(AppConfig::load_from(&path), config);
    }

    #[test]
    fn test_malformed_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "[1, 2").unwrap();

        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
    }
}
