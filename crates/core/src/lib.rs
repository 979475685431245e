//! barline-core: Core traits and helpers for barline.
//!
//! This crate contains the [`ItemFormatter`] trait, the formatter
//! [`FormatterRegistry`], the text and threshold helpers formatters are
//! built from, and the per-item dispatch ([`SourceSlot`]) that enforces
//! snapshot ordering and runs live refresh timers.

pub mod constants;
mod error;
mod formatter;
mod registry;
mod repeat;
mod sink;
mod slot;
pub mod text;
pub mod threshold;

pub use constants::{BYTES_PER_GIB, BYTES_PER_KIB, ELLIPSIS, LIVE_REFRESH_INTERVAL};
pub use error::{FormatError, FormatResult};
pub use formatter::{kind_mismatch, BoxedFormatter, FormatContext, ItemFormatter};
pub use registry::{FormatterFactory, FormatterRegistry};
pub use repeat::RepeatTask;
pub use sink::{ChannelSink, ItemUpdate, OutputSink};
pub use slot::{Clock, Delivery, SourceSlot};

// Re-export types used in trait signatures for convenience
pub use barline_types::{ColorScheme, SeverityTier, Snapshot, SourceKind, SourceSpec, StyledOutput};
