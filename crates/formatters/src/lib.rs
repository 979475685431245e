//! barline-formatters: Built-in item formatters for barline.
//!
//! One formatter per data source kind. Together they reproduce the stock
//! i3status layout: disk space, network, volume, media, battery, load,
//! temperature, memory, command output and a clock.

mod battery;
mod clock;
mod disk;
mod load;
mod media;
mod memory;
mod network;
mod shell;
mod system_temp;
mod volume;

pub use battery::BatteryFormatter;
pub use clock::ClockFormatter;
pub use disk::DiskFormatter;
pub use load::LoadFormatter;
pub use media::MediaFormatter;
pub use memory::MemoryFormatter;
pub use network::{ThroughputFormatter, WifiFormatter, WiredFormatter};
pub use shell::ShellFormatter;
pub use system_temp::CpuTemperatureFormatter;
pub use volume::VolumeFormatter;

use barline_core::{FormatError, FormatterRegistry};
use barline_types::{Fragment, SourceKind, SourceSpec, TextSize};

/// Register all built-in formatters
pub fn register_all(registry: &mut FormatterRegistry) {
    registry.register(SourceKind::DiskSpace, disk::create);
    registry.register(SourceKind::Wifi, network::create_wifi);
    registry.register(SourceKind::Wired, network::create_wired);
    registry.register(SourceKind::Throughput, network::create_throughput);
    registry.register(SourceKind::Volume, volume::create);
    registry.register(SourceKind::Media, media::create);
    registry.register(SourceKind::Battery, battery::create);
    registry.register(SourceKind::LoadAverage, load::create);
    registry.register(SourceKind::CpuTemperature, system_temp::create);
    registry.register(SourceKind::Memory, memory::create);
    registry.register(SourceKind::Shell, shell::create);
    registry.register(SourceKind::Clock, clock::create);
}

/// Narrow gap between an icon and its text
pub(crate) fn spacer() -> Fragment {
    Fragment::text(" ").size(TextSize::XXSmall)
}

/// Error for a factory handed another kind of item config
pub(crate) fn spec_mismatch(expected: SourceKind, spec: &SourceSpec) -> FormatError {
    FormatError::KindMismatch {
        expected,
        actual: spec.kind(),
    }
}
