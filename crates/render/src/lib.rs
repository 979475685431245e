//! barline-render: turns styled item output into text for a bar.
//!
//! Two renderings are provided: plain text (colors dropped) and Pango
//! markup, the format i3bar/swaybar accept with `markup: pango`.

mod icons;
mod markup;
mod plain;

pub use icons::IconSet;
pub use markup::{escape_markup, render_pango};
pub use plain::render_plain;

use barline_types::StyledOutput;
use serde::{Deserialize, Serialize};

/// Output text format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupMode {
    #[default]
    Plain,
    Pango,
}

/// Render one item in the given mode
pub fn render(output: &StyledOutput, icons: &IconSet, mode: MarkupMode) -> String {
    match mode {
        MarkupMode::Plain => render_plain(output, icons),
        MarkupMode::Pango => render_pango(output, icons),
    }
}

/// Join rendered items into one bar line, skipping empty ones
pub fn join_bar<I, S>(items: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .filter(|s| !s.as_ref().is_empty())
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
