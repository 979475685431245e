//! Network item configuration.

use serde::{Deserialize, Serialize};

fn default_prefix() -> String {
    "e".to_string()
}

fn default_throughput_interval() -> u64 {
    2000
}

/// Wired link item: first interface whose name starts with `prefix`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WiredConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for WiredConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

/// Throughput item for one interface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThroughputConfig {
    pub interface: String,
    #[serde(default = "default_throughput_interval")]
    pub interval_ms: u64,
}

impl ThroughputConfig {
    pub fn new(interface: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            interval_ms: default_throughput_interval(),
        }
    }
}
