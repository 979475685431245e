//! Snapshot types delivered by data sources on each poll tick.
//!
//! Snapshots are read-only inputs to formatters. They are produced outside
//! this workspace (sensor polling is not our job) and arrive here already
//! validated, usually deserialized from JSON.

mod battery;
mod media;
mod network;
mod system;

pub use battery::{BatteryInfo, BatteryStatus};
pub use media::{MediaInfo, PlaybackStatus};
pub use network::{LinkState, NetInfo, NetSpeeds, WlanInfo};
pub use system::{ClockTick, CommandOutput, DiskInfo, LoadInfo, MemInfo, Temperature, VolumeInfo};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Seconds from a snapshot field as a `Duration`. Negative and NaN values
/// count as zero; `None` when the value does not fit.
pub(crate) fn secs_to_duration(secs: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(secs.max(0.0)).ok()
}

/// Kind of data source a snapshot (or a formatter) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    DiskSpace,
    Wifi,
    Wired,
    Throughput,
    Volume,
    Media,
    Battery,
    LoadAverage,
    CpuTemperature,
    Memory,
    Shell,
    Clock,
}

impl SourceKind {
    pub const ALL: [SourceKind; 12] = [
        SourceKind::DiskSpace,
        SourceKind::Wifi,
        SourceKind::Wired,
        SourceKind::Throughput,
        SourceKind::Volume,
        SourceKind::Media,
        SourceKind::Battery,
        SourceKind::LoadAverage,
        SourceKind::CpuTemperature,
        SourceKind::Memory,
        SourceKind::Shell,
        SourceKind::Clock,
    ];

    /// Stable identifier, matching the serde name
    pub fn id(&self) -> &'static str {
        match self {
            SourceKind::DiskSpace => "disk_space",
            SourceKind::Wifi => "wifi",
            SourceKind::Wired => "wired",
            SourceKind::Throughput => "throughput",
            SourceKind::Volume => "volume",
            SourceKind::Media => "media",
            SourceKind::Battery => "battery",
            SourceKind::LoadAverage => "load_average",
            SourceKind::CpuTemperature => "cpu_temperature",
            SourceKind::Memory => "memory",
            SourceKind::Shell => "shell",
            SourceKind::Clock => "clock",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One poll cycle's worth of data from a single source.
/// Uses serde tag for JSON: {"kind": "battery", ...}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Snapshot {
    DiskSpace(DiskInfo),
    Wifi(WlanInfo),
    Wired(NetInfo),
    Throughput(NetSpeeds),
    Volume(VolumeInfo),
    Media(MediaInfo),
    Battery(BatteryInfo),
    LoadAverage(LoadInfo),
    CpuTemperature(Temperature),
    Memory(MemInfo),
    Shell(CommandOutput),
    Clock(ClockTick),
}

impl Snapshot {
    pub fn kind(&self) -> SourceKind {
        match self {
            Snapshot::DiskSpace(_) => SourceKind::DiskSpace,
            Snapshot::Wifi(_) => SourceKind::Wifi,
            Snapshot::Wired(_) => SourceKind::Wired,
            Snapshot::Throughput(_) => SourceKind::Throughput,
            Snapshot::Volume(_) => SourceKind::Volume,
            Snapshot::Media(_) => SourceKind::Media,
            Snapshot::Battery(_) => SourceKind::Battery,
            Snapshot::LoadAverage(_) => SourceKind::LoadAverage,
            Snapshot::CpuTemperature(_) => SourceKind::CpuTemperature,
            Snapshot::Memory(_) => SourceKind::Memory,
            Snapshot::Shell(_) => SourceKind::Shell,
            Snapshot::Clock(_) => SourceKind::Clock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = Snapshot::CpuTemperature(Temperature::from_celsius(55.0));
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"kind\":\"cpu_temperature\""));

        let deserialized: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.kind(), SourceKind::CpuTemperature);
    }

    #[test]
    fn test_kind_ids_match_serde_names() {
        for kind in SourceKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.id()));
        }
    }
}
