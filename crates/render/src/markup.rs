//! Pango markup rendering

use barline_types::{Fragment, FragmentStyle, Segment, StyledOutput, TextSize};

use crate::icons::IconSet;
use crate::plain::fragment_text;

/// Escape text for inclusion in Pango markup
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn size_name(size: TextSize) -> &'static str {
    match size {
        TextSize::XXSmall => "xx-small",
        TextSize::XSmall => "x-small",
        TextSize::Small => "small",
        TextSize::Medium => "medium",
        TextSize::Large => "large",
    }
}

fn span_attrs(style: &FragmentStyle) -> Vec<String> {
    let mut attrs = Vec::new();
    if let Some(color) = style.color {
        attrs.push(format!("foreground=\"{}\"", color.to_hex()));
    }
    if let Some(alpha) = style.alpha {
        let pct = (alpha * 100.0).round().clamp(1.0, 100.0) as u32;
        attrs.push(format!("alpha=\"{}%\"", pct));
    }
    if let Some(size) = style.size {
        attrs.push(format!("size=\"{}\"", size_name(size)));
    }
    attrs
}

fn render_fragment(fragment: &Fragment, icons: &IconSet) -> Option<String> {
    let text = escape_markup(&fragment_text(fragment, icons)?);
    let attrs = span_attrs(&fragment.style);
    if attrs.is_empty() {
        Some(text)
    } else {
        Some(format!("<span {}>{}</span>", attrs.join(" "), text))
    }
}

fn render_segment(segment: &Segment, icons: &IconSet) -> String {
    let inner: String = segment
        .fragments
        .iter()
        .filter_map(|f| render_fragment(f, icons))
        .collect();
    let mut attrs = Vec::new();
    if let Some(color) = segment.style.color {
        attrs.push(format!("foreground=\"{}\"", color.to_hex()));
    }
    if segment.style.urgent {
        attrs.push("weight=\"bold\"".to_string());
    }
    if attrs.is_empty() {
        inner
    } else {
        format!("<span {}>{}</span>", attrs.join(" "), inner)
    }
}

/// Render as Pango markup. Urgent segments are drawn bold; the bar's own
/// urgent flag is the renderer's business.
pub fn render_pango(output: &StyledOutput, icons: &IconSet) -> String {
    output
        .segments
        .iter()
        .map(|segment| render_segment(segment, icons))
        .collect()
}
