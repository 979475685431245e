//! CPU temperature item configuration.

use serde::{Deserialize, Serialize};

fn default_update_interval() -> u64 {
    2000
}

fn default_urgent() -> f64 {
    90.0
}

fn default_bad() -> f64 {
    70.0
}

fn default_degraded() -> f64 {
    60.0
}

/// CPU temperature item. Thresholds are in degrees Celsius; the item is
/// colored once the temperature rises strictly above them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuTemperatureConfig {
    #[serde(default = "default_update_interval")]
    pub interval_ms: u64,
    #[serde(default = "default_urgent")]
    pub urgent_above: f64,
    #[serde(default = "default_bad")]
    pub bad_above: f64,
    #[serde(default = "default_degraded")]
    pub degraded_above: f64,
}

impl Default for CpuTemperatureConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_update_interval(),
            urgent_above: default_urgent(),
            bad_above: default_bad(),
            degraded_above: default_degraded(),
        }
    }
}
