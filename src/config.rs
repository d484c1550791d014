use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Application configuration loaded from `~/.config/folio/config.toml`.
/// Missing file, unreadable file, and bad TOML all fall back to defaults.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Display settings
    pub display: DisplayConfig,
    /// Content source settings
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Monochrome mode (no colors)
    pub monochrome: bool,
    /// How long toasts stay on screen, in milliseconds
    pub toast_duration_ms: u64,
    /// Show the vim-keys hint toast on startup
    pub startup_hint: bool,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Path to a content TOML file replacing the built-in portfolio
    pub path: Option<PathBuf>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            monochrome: false,
            toast_duration_ms: 4000,
            startup_hint: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from disk, or return defaults.
    pub fn load() -> Self {
        let Some(path) = config_file_path() else {
            return Self::default();
        };
        fs::read_to_string(path)
            .ok()
            .and_then(|text| toml::from_str(&text).ok())
            .unwrap_or_default()
    }
}

/// Path of the config file, if a home directory can be determined.
pub fn config_file_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "folio").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert!(!config.display.monochrome);
        assert_eq!(config.display.toast_duration_ms, 4000);
        assert!(config.display.startup_hint);
        assert!(config.content.path.is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[display]
monochrome = true
toast_duration_ms = 2500
startup_hint = false

[content]
path = "/tmp/content.toml"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(config.display.monochrome);
        assert_eq!(config.display.toast_duration_ms, 2500);
        assert!(!config.display.startup_hint);
        assert_eq!(
            config.content.path.as_deref(),
            Some(std::path::Path::new("/tmp/content.toml"))
        );
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: AppConfig = toml::from_str("[display]\nmonochrome = true\n").unwrap();
        assert!(config.display.monochrome);
        assert_eq!(config.display.toast_duration_ms, 4000);
    }
}
