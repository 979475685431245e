//! barline: formatting of i3status-style bar items
//!
//! This library wires the workspace crates together:
//! - Configuration loading and saving
//! - The [`Bar`], which owns one dispatch slot per configured item and
//!   renders the current bar line

pub mod bar;
pub mod config;

// Re-export commonly used types
pub use bar::{Bar, SnapshotEvent};
pub use config::BarConfig;

use barline_core::FormatterRegistry;

/// Registry holding every built-in formatter
pub fn default_registry() -> FormatterRegistry {
    let mut registry = FormatterRegistry::new();
    barline_formatters::register_all(&mut registry);
    registry
}
