//! Item formatter trait and related types

use barline_types::{Snapshot, SourceKind, StyledOutput};
use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::error::{FormatError, FormatResult};

/// Inputs a formatter may use besides the snapshot.
///
/// The wall-clock time is passed in rather than read, so formatting the
/// same snapshot with the same context always yields the same output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatContext {
    pub now: DateTime<Utc>,
}

impl FormatContext {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

/// Trait for all bar item formatters
///
/// A formatter maps one source's snapshot to styled output. It must not
/// block, sleep or do I/O: it runs on the renderer's dispatch path.
pub trait ItemFormatter: Send + Sync {
    /// Formatter identifier, usually the source kind id
    fn id(&self) -> &str;

    /// Kind of snapshot this formatter accepts
    fn kind(&self) -> SourceKind;

    /// Format a snapshot. `Ok(None)` means the item is absent this cycle
    /// and the renderer must omit it.
    fn format(&self, snapshot: &Snapshot, ctx: &FormatContext) -> FormatResult<Option<StyledOutput>>;

    /// Ask to be re-invoked with the same snapshot on a fixed cadence.
    /// Used by items that show a running clock.
    fn refresh_interval(&self, _snapshot: &Snapshot) -> Option<Duration> {
        None
    }
}

/// Type-erased formatter for dynamic dispatch
pub type BoxedFormatter = Box<dyn ItemFormatter>;

/// Error for a snapshot of the wrong kind
pub fn kind_mismatch(expected: SourceKind, snapshot: &Snapshot) -> FormatError {
    FormatError::KindMismatch {
        expected,
        actual: snapshot.kind(),
    }
}
