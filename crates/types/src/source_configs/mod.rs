//! Registration handles for every data source.
//!
//! A [`SourceSpec`] names a data source and its parameters. The polling side
//! uses the parameters to know what to watch; formatters use them for labels
//! and display options.

pub mod audio;
pub mod clock;
pub mod disk;
pub mod network;
pub mod shell;
pub mod system_temp;

pub use audio::{MediaConfig, VolumeConfig};
pub use clock::ClockConfig;
pub use disk::DiskSpaceConfig;
pub use network::{ThroughputConfig, WiredConfig};
pub use shell::{ShellConfig, ShellFormat};
pub use system_temp::CpuTemperatureConfig;

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::snapshot::SourceKind;

/// Type-safe enum for all bar items.
/// Uses serde tag for JSON serialization: {"source": "disk_space", ...}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum SourceSpec {
    DiskSpace(DiskSpaceConfig),
    Wifi,
    Wired(WiredConfig),
    Throughput(ThroughputConfig),
    Volume(VolumeConfig),
    Media(MediaConfig),
    Battery,
    LoadAverage,
    CpuTemperature(CpuTemperatureConfig),
    Memory,
    Shell(ShellConfig),
    Clock(ClockConfig),
}

impl SourceSpec {
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceSpec::DiskSpace(_) => SourceKind::DiskSpace,
            SourceSpec::Wifi => SourceKind::Wifi,
            SourceSpec::Wired(_) => SourceKind::Wired,
            SourceSpec::Throughput(_) => SourceKind::Throughput,
            SourceSpec::Volume(_) => SourceKind::Volume,
            SourceSpec::Media(_) => SourceKind::Media,
            SourceSpec::Battery => SourceKind::Battery,
            SourceSpec::LoadAverage => SourceKind::LoadAverage,
            SourceSpec::CpuTemperature(_) => SourceKind::CpuTemperature,
            SourceSpec::Memory => SourceKind::Memory,
            SourceSpec::Shell(_) => SourceKind::Shell,
            SourceSpec::Clock(_) => SourceKind::Clock,
        }
    }

    /// Polling cadence requested from the data source, where one is configured
    pub fn poll_interval(&self) -> Option<Duration> {
        match self {
            SourceSpec::Throughput(cfg) => Some(Duration::from_millis(cfg.interval_ms)),
            SourceSpec::CpuTemperature(cfg) => Some(Duration::from_millis(cfg.interval_ms)),
            SourceSpec::Shell(cfg) => Some(Duration::from_millis(cfg.interval_ms)),
            _ => None,
        }
    }

    /// Short human-readable description, e.g. `disk_space(/home)`
    pub fn describe(&self) -> String {
        match self {
            SourceSpec::DiskSpace(cfg) => format!("{}({})", self.kind(), cfg.path),
            SourceSpec::Wired(cfg) => format!("{}({}*)", self.kind(), cfg.prefix),
            SourceSpec::Throughput(cfg) => format!("{}({})", self.kind(), cfg.interface),
            SourceSpec::Volume(cfg) => format!("{}({})", self.kind(), cfg.mixer),
            SourceSpec::Shell(cfg) => format!("{}({})", self.kind(), cfg.command),
            SourceSpec::Clock(cfg) => format!("{}({})", self.kind(), cfg.timezone),
            _ => self.kind().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_spec_serialization() {
        let spec = SourceSpec::DiskSpace(DiskSpaceConfig::new("/home"));
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains("\"source\":\"disk_space\""));

        let deserialized: SourceSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.kind(), SourceKind::DiskSpace);
        assert_eq!(deserialized, spec);
    }

    #[test]
    fn test_unit_variant_from_json() {
        let spec: SourceSpec = serde_json::from_str(r#"{"source":"battery"}"#).unwrap();
        assert_eq!(spec, SourceSpec::Battery);
        assert_eq!(spec.poll_interval(), None);
    }

    #[test]
    fn test_poll_interval_defaults() {
        let spec: SourceSpec =
            serde_json::from_str(r#"{"source":"cpu_temperature"}"#).unwrap();
        assert_eq!(spec.poll_interval(), Some(Duration::from_secs(2)));
        assert_eq!(spec.describe(), "cpu_temperature");
    }
}
