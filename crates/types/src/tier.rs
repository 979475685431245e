//! Severity tiers driving item colors.

use serde::{Deserialize, Serialize};

/// Discrete urgency level of a metric, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Normal,
    Degraded,
    Bad,
    Urgent,
}

impl SeverityTier {
    /// Color scheme entry for this tier. Urgent is a flag on the segment,
    /// not a color, so it has no entry.
    pub fn scheme_key(&self) -> Option<&'static str> {
        match self {
            SeverityTier::Normal => Some("good"),
            SeverityTier::Degraded => Some("degraded"),
            SeverityTier::Bad => Some("bad"),
            SeverityTier::Urgent => None,
        }
    }
}
