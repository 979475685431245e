//! Volume and media item configuration.

use serde::{Deserialize, Serialize};

fn default_mixer() -> String {
    "default".to_string()
}

fn default_control() -> String {
    "Master".to_string()
}

/// Mixer to show the volume of
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeConfig {
    #[serde(default = "default_mixer")]
    pub mixer: String,
    #[serde(default = "default_control")]
    pub control: String,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            mixer: default_mixer(),
            control: default_control(),
        }
    }
}

fn default_total_budget() -> usize {
    50
}

fn default_artist_cap() -> usize {
    14
}

fn default_rebalance_below() -> usize {
    35
}

/// Media player item. `player: None` follows whichever player is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaConfig {
    #[serde(default)]
    pub player: Option<String>,
    /// Combined character budget for title and artist
    #[serde(default = "default_total_budget")]
    pub total_budget: usize,
    /// Initial cap on the artist
    #[serde(default = "default_artist_cap")]
    pub artist_cap: usize,
    /// Titles shorter than this give their unused budget back to the artist
    #[serde(default = "default_rebalance_below")]
    pub rebalance_below: usize,
    /// Icon color as a hex string
    #[serde(default)]
    pub icon_color: Option<String>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            player: None,
            total_budget: default_total_budget(),
            artist_cap: default_artist_cap(),
            rebalance_below: default_rebalance_below(),
            icon_color: None,
        }
    }
}
