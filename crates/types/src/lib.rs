//! barline-types: Shared data types for barline.
//!
//! This crate contains pure data types (snapshots, styled output, colors,
//! source specs) shared across all barline crates. Nothing here polls,
//! renders or spawns tasks.

pub mod color;
pub mod output;
pub mod snapshot;
pub mod source_configs;
pub mod tier;

// Re-export commonly used types at the crate root for convenience
pub use color::{Color, ColorScheme, ParseColorError};
pub use output::{Fragment, FragmentKind, FragmentStyle, Segment, SegmentStyle, StyledOutput, TextSize};
pub use snapshot::{
    BatteryInfo, BatteryStatus, ClockTick, CommandOutput, DiskInfo, LinkState, LoadInfo,
    MediaInfo, MemInfo, NetInfo, NetSpeeds, PlaybackStatus, Snapshot, SourceKind, Temperature,
    VolumeInfo, WlanInfo,
};
pub use source_configs::{
    ClockConfig, CpuTemperatureConfig, DiskSpaceConfig, MediaConfig, ShellConfig, ShellFormat,
    SourceSpec, ThroughputConfig, VolumeConfig, WiredConfig,
};
pub use tier::SeverityTier;
