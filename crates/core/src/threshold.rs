//! Severity classification and styling for metric-bearing items.
//!
//! Boundaries used by the built-in formatters:
//!
//! | Metric | Urgent | Bad | Degraded |
//! |---|---|---|---|
//! | disk free fraction | - | `< 0.20` | `< 0.33` |
//! | memory free fraction | - | `< 0.20` | `< 0.33` |
//! | battery (discharging) | - | `pct < 20` or `remaining < 30m` | - |
//! | CPU temperature °C | `> 90` | `> 70` | `> 60` |
//! | 1 minute load | - | `> 6.0` | - |

use barline_types::{ColorScheme, SeverityTier, StyledOutput};

/// Tiers tested after the urgent condition, most severe first
const TIER_ORDER: [SeverityTier; 3] = [SeverityTier::Bad, SeverityTier::Degraded, SeverityTier::Normal];

/// Pick a tier from conditions evaluated in priority order.
///
/// `urgent` is checked first; `tiers` holds the bad, degraded and good
/// conditions in that order (trailing ones may be omitted). The first true
/// condition wins. `None` means default styling.
pub fn classify(urgent: bool, tiers: &[bool]) -> Option<SeverityTier> {
    if urgent {
        return Some(SeverityTier::Urgent);
    }
    tiers
        .iter()
        .zip(TIER_ORDER)
        .find_map(|(&hit, tier)| hit.then_some(tier))
}

/// Style `output` with `tier`; `None` leaves it untouched
pub fn apply(output: StyledOutput, tier: Option<SeverityTier>, scheme: &ColorScheme) -> StyledOutput {
    match tier {
        Some(tier) => output.apply_tier(tier, scheme),
        None => output,
    }
}

/// Which side of a boundary is the bad side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Smaller is worse (free space, battery)
    Below,
    /// Larger is worse (temperature, load)
    Above,
}

/// Numeric boundaries for one metric. Comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundaries {
    pub direction: Direction,
    pub urgent: Option<f64>,
    pub bad: Option<f64>,
    pub degraded: Option<f64>,
    pub good: Option<f64>,
}

impl Boundaries {
    /// Values below `bad` are Bad, below `degraded` are Degraded
    pub fn below(bad: f64, degraded: f64) -> Self {
        Self {
            direction: Direction::Below,
            urgent: None,
            bad: Some(bad),
            degraded: Some(degraded),
            good: None,
        }
    }

    /// Values above `bad` are Bad, above `degraded` are Degraded
    pub fn above(bad: f64, degraded: f64) -> Self {
        Self {
            direction: Direction::Above,
            urgent: None,
            bad: Some(bad),
            degraded: Some(degraded),
            good: None,
        }
    }

    /// Single boundary: only Bad or default
    pub fn above_only(bad: f64) -> Self {
        Self {
            direction: Direction::Above,
            urgent: None,
            bad: Some(bad),
            degraded: None,
            good: None,
        }
    }

    pub fn with_urgent(mut self, urgent: f64) -> Self {
        self.urgent = Some(urgent);
        self
    }

    /// Mark values past `good` (on the bad side) as Normal rather than default
    pub fn with_good(mut self, good: f64) -> Self {
        self.good = Some(good);
        self
    }

    fn crosses(&self, value: f64, boundary: Option<f64>) -> bool {
        match (self.direction, boundary) {
            (Direction::Below, Some(b)) => value < b,
            (Direction::Above, Some(b)) => value > b,
            (_, None) => false,
        }
    }

    pub fn classify(&self, value: f64) -> Option<SeverityTier> {
        classify(
            self.crosses(value, self.urgent),
            &[
                self.crosses(value, self.bad),
                self.crosses(value, self.degraded),
                self.crosses(value, self.good),
            ],
        )
    }
}

/// Free-fraction boundaries shared by disk and memory items
pub const FREE_FRACTION: Boundaries = Boundaries {
    direction: Direction::Below,
    urgent: None,
    bad: Some(0.20),
    degraded: Some(0.33),
    good: None,
};
