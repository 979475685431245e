//! Plain text rendering

use barline_core::text::pad_left;
use barline_types::{Fragment, StyledOutput};

use crate::icons::IconSet;

pub(crate) fn fragment_text(fragment: &Fragment, icons: &IconSet) -> Option<String> {
    let content = if fragment.is_icon() {
        icons.glyph(&fragment.content)?
    } else {
        fragment.content.as_str()
    };
    Some(pad_left(content, fragment.style.min_width.unwrap_or(0)))
}

/// Render without any styling
pub fn render_plain(output: &StyledOutput, icons: &IconSet) -> String {
    output
        .segments
        .iter()
        .flat_map(|segment| segment.fragments.iter())
        .filter_map(|fragment| fragment_text(fragment, icons))
        .collect()
}
