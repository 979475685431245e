//! Icon name to glyph mapping

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Glyphs substituted for icon fragments. Icons without an entry are
/// left out of the rendered text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconSet(HashMap<String, String>);

impl IconSet {
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    pub fn glyph(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn with(mut self, name: impl Into<String>, glyph: impl Into<String>) -> Self {
        self.0.insert(name.into(), glyph.into());
        self
    }

    /// Fill in default glyphs for icons not set here
    pub fn merged_with_defaults(mut self) -> Self {
        for (name, glyph) in IconSet::default().0 {
            self.0.entry(name).or_insert(glyph);
        }
        self
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::empty()
            .with("fa-music", "♫")
            .with("fa-upload", "↑")
            .with("fa-download", "↓")
            .with("fa-volume-mute", "🔇")
            .with("fa-volume-off", "🔈")
            .with("fa-volume-down", "🔉")
            .with("fa-volume-up", "🔊")
            .with("mdi-fan", "❄")
    }
}
