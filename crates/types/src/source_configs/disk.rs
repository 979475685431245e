//! Disk space item configuration.

use serde::{Deserialize, Serialize};

/// Disk space item configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskSpaceConfig {
    /// Mount point to watch
    pub path: String,
    /// Label shown before the free space; derived from the path when unset
    #[serde(default)]
    pub label: Option<String>,
}

impl DiskSpaceConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Label to display: custom label, or a short form of the mount point
    pub fn display_label(&self) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }
        match self.path.as_str() {
            "/" => "/".to_string(),
            path => path
                .trim_end_matches('/')
                .rsplit('/')
                .next()
                .unwrap_or(path)
                .to_uppercase(),
        }
    }
}

impl Default for DiskSpaceConfig {
    fn default() -> Self {
        Self::new("/")
    }
}
