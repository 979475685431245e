//! Clock item configuration.

use serde::{Deserialize, Serialize};

fn default_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

fn default_timezone() -> String {
    "Local".to_string()
}

/// Clock item configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Timezone ID (e.g., "America/New_York", "Europe/London", "Local")
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// strftime-style format string
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            format: default_format(),
        }
    }
}
