//! Battery snapshot (aggregate over all batteries).

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::secs_to_duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryStatus {
    /// No battery present
    #[default]
    Disconnected,
    Unknown,
    Charging,
    Discharging,
    NotCharging,
    Full,
}

/// Battery charge state. Energies are in watt-hours, power in watts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BatteryInfo {
    #[serde(default)]
    pub status: BatteryStatus,
    #[serde(default)]
    pub energy_now: f64,
    #[serde(default)]
    pub energy_full: f64,
    #[serde(default)]
    pub power: f64,
}

impl BatteryInfo {
    pub fn discharging(&self) -> bool {
        self.status == BatteryStatus::Discharging
    }

    pub fn remaining_frac(&self) -> f64 {
        if self.energy_full <= 0.0 {
            return 0.0;
        }
        (self.energy_now / self.energy_full).clamp(0.0, 1.0)
    }

    /// Remaining charge in whole percent, rounded to nearest
    pub fn remaining_pct(&self) -> u32 {
        (self.remaining_frac() * 100.0).round() as u32
    }

    /// Time to empty while discharging, time to full while charging.
    /// Zero when the power draw is unknown, `None` when the readings give a
    /// time too large to represent.
    pub fn remaining_time(&self) -> Option<Duration> {
        if self.power <= 0.0 {
            return Some(Duration::ZERO);
        }
        let energy = if self.status == BatteryStatus::Charging {
            (self.energy_full - self.energy_now).max(0.0)
        } else {
            self.energy_now.max(0.0)
        };
        secs_to_duration(energy * 3600.0 / self.power)
    }
}
