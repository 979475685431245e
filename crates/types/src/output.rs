//! Styled output handed from formatters to the renderer.
//!
//! A [`StyledOutput`] is an ordered group of [`Segment`]s; each segment is a
//! run of text and icon [`Fragment`]s sharing one [`SegmentStyle`]. Values
//! are built fresh on every formatting call and never shared.

use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorScheme};
use crate::tier::SeverityTier;

/// What a fragment draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FragmentKind {
    Text,
    /// Icon by name (e.g. "fa-music"); the renderer maps it to a glyph.
    Icon,
}

/// Relative text size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextSize {
    XXSmall,
    XSmall,
    Small,
    Medium,
    Large,
}

/// Per-fragment style attributes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FragmentStyle {
    pub color: Option<Color>,
    /// Opacity 0.0 - 1.0
    pub alpha: Option<f64>,
    pub size: Option<TextSize>,
    /// Pad the content on the left up to this many characters
    pub min_width: Option<usize>,
}

/// One piece of text or one icon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub content: String,
    #[serde(default)]
    pub style: FragmentStyle,
}

impl Fragment {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: FragmentKind::Text,
            content: content.into(),
            style: FragmentStyle::default(),
        }
    }

    pub fn icon(name: impl Into<String>) -> Self {
        Self {
            kind: FragmentKind::Icon,
            content: name.into(),
            style: FragmentStyle::default(),
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.style.color = Some(color);
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.style.alpha = Some(alpha.clamp(0.0, 1.0));
        self
    }

    pub fn size(mut self, size: TextSize) -> Self {
        self.style.size = Some(size);
        self
    }

    pub fn min_width(mut self, width: usize) -> Self {
        self.style.min_width = Some(width);
        self
    }

    pub fn is_icon(&self) -> bool {
        self.kind == FragmentKind::Icon
    }
}

/// Style shared by every fragment of a segment
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentStyle {
    pub tier: Option<SeverityTier>,
    pub color: Option<Color>,
    pub urgent: bool,
}

/// A run of fragments rendered as one block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub fragments: Vec<Fragment>,
    #[serde(default)]
    pub style: SegmentStyle,
}

impl Segment {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self {
            fragments,
            style: SegmentStyle::default(),
        }
    }

    /// Set the tier, replacing whatever tier was there before
    fn set_tier(&mut self, tier: SeverityTier, scheme: &ColorScheme) {
        self.style.tier = Some(tier);
        if tier == SeverityTier::Urgent {
            self.style.urgent = true;
        } else {
            self.style.urgent = false;
            self.style.color = scheme.tier(tier);
        }
    }
}

/// Renderer-ready output of one bar item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyledOutput {
    pub segments: Vec<Segment>,
}

impl StyledOutput {
    /// Single plain text segment
    pub fn text(content: impl Into<String>) -> Self {
        Self::from_fragments(vec![Fragment::text(content)])
    }

    pub fn from_fragments(fragments: Vec<Fragment>) -> Self {
        Self {
            segments: vec![Segment::new(fragments)],
        }
    }

    /// Concatenate several outputs into one group, keeping segment order
    pub fn group(outputs: impl IntoIterator<Item = StyledOutput>) -> Self {
        Self {
            segments: outputs.into_iter().flat_map(|o| o.segments).collect(),
        }
    }

    /// Style every segment with `tier`.
    ///
    /// The tier replaces any earlier tier, so applying the same tier twice
    /// gives the same result as applying it once.
    pub fn apply_tier(mut self, tier: SeverityTier, scheme: &ColorScheme) -> Self {
        for segment in &mut self.segments {
            segment.set_tier(tier, scheme);
        }
        self
    }

    /// Highest tier across segments
    pub fn tier(&self) -> Option<SeverityTier> {
        self.segments.iter().filter_map(|s| s.style.tier).max()
    }

    pub fn is_urgent(&self) -> bool {
        self.segments.iter().any(|s| s.style.urgent)
    }

    /// Text content without icons or padding
    pub fn plain_text(&self) -> String {
        self.segments
            .iter()
            .flat_map(|s| s.fragments.iter())
            .filter(|f| !f.is_icon())
            .map(|f| f.content.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_tier_is_idempotent() {
        let scheme = ColorScheme::default();
        let once = StyledOutput::text("/ 1.2 GiB").apply_tier(SeverityTier::Bad, &scheme);
        let twice = once.clone().apply_tier(SeverityTier::Bad, &scheme);
        assert_eq!(once, twice);
        assert_eq!(once.tier(), Some(SeverityTier::Bad));
        assert_eq!(once.segments[0].style.color, scheme.get("bad"));
    }

    #[test]
    fn test_apply_tier_replaces_previous() {
        let scheme = ColorScheme::default();
        let out = StyledOutput::text("x")
            .apply_tier(SeverityTier::Urgent, &scheme)
            .apply_tier(SeverityTier::Degraded, &scheme);
        assert!(!out.is_urgent());
        assert_eq!(out.tier(), Some(SeverityTier::Degraded));
        assert_eq!(out.segments[0].style.color, scheme.get("degraded"));
    }

    #[test]
    fn test_group_and_plain_text() {
        let icon = StyledOutput::from_fragments(vec![Fragment::icon("fa-music"), Fragment::text(" 1:00")]);
        let title = StyledOutput::text("Song - Artist");
        let out = StyledOutput::group([icon, title]);
        assert_eq!(out.segments.len(), 2);
        assert_eq!(out.plain_text(), " 1:00Song - Artist");
    }
}
