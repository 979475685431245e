//! Shared constants

use std::time::Duration;

/// Marker inserted where text was cut
pub const ELLIPSIS: char = '⋯';

pub const BYTES_PER_KIB: f64 = 1024.0;
pub const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Re-render cadence for items showing a running clock (media elapsed time)
pub const LIVE_REFRESH_INTERVAL: Duration = Duration::from_secs(1);
