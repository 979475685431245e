//! Snapshots for disk, memory, load, temperature, volume, shell output and clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Space on one mounted filesystem, in bytes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiskInfo {
    #[serde(default)]
    pub path: String,
    pub total: u64,
    pub available: u64,
}

impl DiskInfo {
    /// Available space as a fraction of the total (0.0 for an empty disk)
    pub fn avail_frac(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.available as f64 / self.total as f64
    }
}

/// Memory counters in bytes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MemInfo {
    pub total: u64,
    pub available: u64,
    #[serde(default)]
    pub free: u64,
}

impl MemInfo {
    pub fn used(&self) -> u64 {
        self.total.saturating_sub(self.available)
    }

    pub fn avail_frac(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.available as f64 / self.total as f64
    }
}

/// 1, 5 and 15 minute load averages
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadInfo {
    pub loads: [f64; 3],
    #[serde(default)]
    pub uptime_secs: u64,
}

/// CPU package temperature
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Temperature {
    pub millicelsius: i64,
}

impl Temperature {
    pub fn from_celsius(celsius: f64) -> Self {
        Self {
            millicelsius: (celsius * 1000.0).round() as i64,
        }
    }

    pub fn celsius(&self) -> f64 {
        self.millicelsius as f64 / 1000.0
    }
}

/// Mixer volume on the mixer's own scale
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VolumeInfo {
    #[serde(default)]
    pub min: i64,
    pub max: i64,
    pub vol: i64,
    #[serde(default)]
    pub mute: bool,
}

impl VolumeInfo {
    pub fn frac(&self) -> f64 {
        let range = self.max - self.min;
        if range <= 0 {
            return 0.0;
        }
        ((self.vol - self.min) as f64 / range as f64).clamp(0.0, 1.0)
    }

    /// Volume in whole percent, rounded to nearest
    pub fn pct(&self) -> u32 {
        (self.frac() * 100.0).round() as u32
    }
}

/// Captured stdout of a periodically run command
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommandOutput {
    pub stdout: String,
}

/// Clock tick carrying the instant to display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockTick {
    pub at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_avail_frac() {
        let disk = DiskInfo {
            path: "/".into(),
            total: 100,
            available: 15,
        };
        assert!((disk.avail_frac() - 0.15).abs() < f64::EPSILON);
        assert_eq!(DiskInfo::default().avail_frac(), 0.0);
    }

    #[test]
    fn test_volume_pct() {
        let v = VolumeInfo {
            min: 0,
            max: 65536,
            vol: 32768,
            mute: false,
        };
        assert_eq!(v.pct(), 50);
        let broken = VolumeInfo { min: 10, max: 10, vol: 10, mute: false };
        assert_eq!(broken.pct(), 0);
    }

    #[test]
    fn test_memory_used() {
        let m = MemInfo {
            total: 8,
            available: 10,
            free: 0,
        };
        assert_eq!(m.used(), 0);
    }

    #[test]
    fn test_temperature_roundtrip() {
        assert_eq!(Temperature::from_celsius(71.5).celsius(), 71.5);
    }
}
