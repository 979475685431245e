//! Bar configuration

use anyhow::{Context, Result};
use barline_render::{IconSet, MarkupMode};
use barline_types::{ColorScheme, SourceSpec};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::defaults::default_items;

/// Current config format version
pub const CONFIG_VERSION: u32 = 1;

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_separator() -> String {
    " | ".to_string()
}

/// Whole-bar configuration, loaded once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarConfig {
    /// Version of the config format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Named colors ("good", "degraded", "bad", ...)
    #[serde(default)]
    pub colors: ColorScheme,
    /// Icon glyph overrides; missing icons fall back to the built-in set
    #[serde(default)]
    pub icons: IconSet,
    /// Bar items, left to right
    #[serde(default = "default_items")]
    pub items: Vec<SourceSpec>,
    #[serde(default)]
    pub markup: MarkupMode,
    /// Text placed between rendered items
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl BarConfig {
    /// Load configuration from the standard location, falling back to
    /// defaults when there is no config file yet
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Save configuration to the standard location
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_path()?)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("org", "barline", "barline")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config.normalized())
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    fn normalized(mut self) -> Self {
        self.icons = self.icons.merged_with_defaults();
        self
    }
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            colors: ColorScheme::default(),
            icons: IconSet::default(),
            items: default_items(),
            markup: MarkupMode::default(),
            separator: default_separator(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barline_types::{Color, SourceKind};

    #[test]
    fn test_empty_json_gives_defaults() {
        let config: BarConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BarConfig::default());
        assert_eq!(config.items.len(), 14);
        assert_eq!(config.items.last().map(|s| s.kind()), Some(SourceKind::Clock));
    }

    #[test]
    fn test_partial_config() {
        let json = r##"{
            "colors": {"good": "#00ff00", "bad": "#ff0000", "degraded": "#ffaa00"},
            "items": [{"source": "battery"}, {"source": "clock", "timezone": "UTC"}],
            "markup": "pango"
        }"##;
        let config: BarConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.items.len(), 2);
        assert_eq!(config.markup, MarkupMode::Pango);
        assert_eq!(config.colors.get("degraded"), Color::from_hex("#ffaa00").ok());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut config = BarConfig::default();
        config.separator = "  ".to_string();
        config.icons = IconSet::empty().with("fa-music", "M");
        config.save_to_path(&path).unwrap();

        let loaded = BarConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.separator, "  ");
        assert_eq!(loaded.icons.glyph("fa-music"), Some("M"));
        assert_eq!(loaded.icons.glyph("mdi-fan"), Some("❄"));
    }

    #[test]
    fn test_load_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = BarConfig::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
