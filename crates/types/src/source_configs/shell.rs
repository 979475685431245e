//! Shell command item configuration.

use serde::{Deserialize, Serialize};

fn default_update_interval() -> u64 {
    600_000
}

fn default_separator() -> String {
    " ".to_string()
}

/// How command output becomes item text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ShellFormat {
    /// Trimmed output as-is
    #[default]
    Raw,
    /// Split on `separator` and show the fields at `pick`, in that order,
    /// joined by a single space
    Fields {
        pick: Vec<usize>,
        #[serde(default = "default_separator")]
        separator: String,
    },
}

/// Periodically run command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default = "default_update_interval")]
    pub interval_ms: u64,
    #[serde(default)]
    pub format: ShellFormat,
}

impl ShellConfig {
    pub fn new(command: impl Into<String>, args: &[&str]) -> Self {
        Self {
            command: command.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            interval_ms: default_update_interval(),
            format: ShellFormat::Raw,
        }
    }

    pub fn with_format(mut self, format: ShellFormat) -> Self {
        self.format = format;
        self
    }
}
