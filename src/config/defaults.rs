//! Default bar layout
//!
//! Mirrors the stock i3status bar: disks, network, volume, media, battery,
//! load, temperature, memory, two command items and a clock.

use barline_types::{
    ClockConfig, CpuTemperatureConfig, DiskSpaceConfig, MediaConfig, ShellConfig, ShellFormat, SourceSpec,
    ThroughputConfig, VolumeConfig, WiredConfig,
};

/// Interface watched by the default throughput item
const DEFAULT_WIRELESS_INTERFACE: &str = "wlp0s20f3";

/// Items of the default bar, left to right
pub fn default_items() -> Vec<SourceSpec> {
    vec![
        SourceSpec::DiskSpace(DiskSpaceConfig::new("/")),
        SourceSpec::DiskSpace(DiskSpaceConfig::new("/home")),
        SourceSpec::Wifi,
        SourceSpec::Wired(WiredConfig::default()),
        SourceSpec::Throughput(ThroughputConfig::new(DEFAULT_WIRELESS_INTERFACE)),
        SourceSpec::Volume(VolumeConfig::default()),
        SourceSpec::Media(MediaConfig::default()),
        SourceSpec::Battery,
        SourceSpec::LoadAverage,
        SourceSpec::CpuTemperature(CpuTemperatureConfig::default()),
        SourceSpec::Memory,
        SourceSpec::Shell(ShellConfig::new("curl", &["-s", "ifconfig.io/country_code"])),
        SourceSpec::Shell(ShellConfig::new("jdate", &[]).with_format(ShellFormat::Fields {
            pick: vec![2, 1],
            separator: " ".to_string(),
        })),
        SourceSpec::Clock(ClockConfig::default()),
    ]
}
