//! Text helpers shared by item formatters.
//!
//! All lengths are counted in Unicode scalar values (`char`s), never bytes,
//! so truncation can not split a character.

use crate::constants::{BYTES_PER_KIB, ELLIPSIS};
use std::iter;
use std::time::Duration;

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn limit_from(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

/// Bound `text` to `|limit|` characters, marking the cut with an ellipsis.
///
/// A positive limit keeps the start of the text, a negative limit keeps the
/// end. Text that already fits is returned unchanged. A limit of zero
/// leaves room for nothing but the ellipsis.
pub fn truncate(text: &str, limit: i32) -> String {
    if limit == 0 {
        return ELLIPSIS.to_string();
    }
    let keep = limit.unsigned_abs() as usize;
    let len = char_len(text);
    if len <= keep {
        return text.to_string();
    }
    if limit > 0 {
        text.chars().take(keep - 1).chain(iter::once(ELLIPSIS)).collect()
    } else {
        iter::once(ELLIPSIS)
            .chain(text.chars().skip(len - (keep - 1)))
            .collect()
    }
}

/// Character budget shared by a short and a long label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairBudget {
    /// Combined budget for both labels
    pub total: usize,
    /// First pass cap on the short label
    pub first_cap: usize,
    /// If the long label ends up shorter than this, the short label may
    /// grow into the freed space (up to this many characters combined)
    pub rebalance_below: usize,
}

impl Default for PairBudget {
    fn default() -> Self {
        Self {
            total: 50,
            first_cap: 14,
            rebalance_below: 35,
        }
    }
}

/// Fit a short label (`first`, e.g. artist) and a long label (`second`,
/// e.g. title) into a shared budget.
///
/// The short label is capped first and the long label gets the rest. When
/// the long label turns out shorter than `rebalance_below`, the short label
/// is cut again from the full text, this time against whatever the long
/// label left unused.
pub fn fit_pair(first: &str, second: &str, budget: PairBudget) -> (String, String) {
    let mut first_fit = truncate(first, limit_from(budget.first_cap));
    let second_limit = budget.total.saturating_sub(char_len(&first_fit));
    let second_fit = truncate(second, limit_from(second_limit));
    let second_len = char_len(&second_fit);
    if second_len < budget.rebalance_below {
        first_fit = truncate(first, limit_from(budget.rebalance_below - second_len));
    }
    (first_fit, second_fit)
}

/// Format a duration as `H:MM:SS`, or `M:SS` when under an hour
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Same as [`format_duration`] for a signed second count; negative values
/// are clamped to zero
pub fn format_signed_secs(secs: i64) -> String {
    format_duration(Duration::from_secs(secs.max(0) as u64))
}

/// Compact remaining-time form: `1h05m`, `20m`
pub fn format_remaining(duration: Duration) -> String {
    let total_minutes = duration.as_secs() / 60;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours > 0 {
        format!("{}h{:02}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Three significant digits, at least one of them before the point.
/// The precision is picked after rounding, so 9.996 prints as `10.0`.
fn three_digits(value: f64) -> String {
    let rounded = |places: i32| {
        let factor = 10f64.powi(places);
        (value * factor).round() / factor
    };
    if rounded(2) < 10.0 {
        format!("{:.2}", value)
    } else if rounded(1) < 100.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.0}", value)
    }
}

/// Scale `value` through `units` by `base`, moving up a unit whenever the
/// rounded value would reach `base`
fn scaled(value: f64, base: f64, units: &[&str]) -> String {
    let Some((last, rest)) = units.split_last() else {
        return three_digits(value);
    };
    let mut value = value;
    for unit in rest {
        if value.round() < base {
            return format!("{} {}", three_digits(value), unit);
        }
        value /= base;
    }
    format!("{} {}", three_digits(value), last)
}

/// Binary (IEC) byte size, e.g. `12.3 GiB`
pub fn ibytes(bytes: u64) -> String {
    let value = bytes as f64;
    if value < BYTES_PER_KIB {
        return format!("{} B", bytes);
    }
    scaled(value / BYTES_PER_KIB, BYTES_PER_KIB, &["KiB", "MiB", "GiB", "TiB", "PiB"])
}

/// Decimal (SI) transfer rate, e.g. `1.20 MB/s`
pub fn byterate(bytes_per_sec: f64) -> String {
    let value = if bytes_per_sec.is_finite() {
        bytes_per_sec.max(0.0)
    } else {
        0.0
    };
    if value.round() < 1000.0 {
        return format!("{:.0} B/s", value);
    }
    scaled(value / 1000.0, 1000.0, &["kB/s", "MB/s", "GB/s", "TB/s"])
}

/// Right-align `text` to `width` characters
pub fn pad_left(text: &str, width: usize) -> String {
    let len = char_len(text);
    if len >= width {
        return text.to_string();
    }
    let mut padded = " ".repeat(width - len);
    padded.push_str(text);
    padded
}
