//! Network snapshots: wireless link, wired link and throughput.

use serde::{Deserialize, Serialize};

/// Link state, ordered from "no device" to "fully connected"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkState {
    /// No matching interface
    #[default]
    NotPresent,
    /// Interface exists but is administratively down
    Disabled,
    /// Interface is up but has no link
    Down,
    /// Link negotiation / address assignment in progress
    Connecting,
    Connected,
}

impl LinkState {
    pub fn connected(&self) -> bool {
        *self == LinkState::Connected
    }

    pub fn connecting(&self) -> bool {
        *self == LinkState::Connecting
    }

    /// The interface is enabled, whether or not it has a link
    pub fn enabled(&self) -> bool {
        *self >= LinkState::Down
    }
}

/// Wireless interface state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WlanInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: LinkState,
    #[serde(default)]
    pub ssid: String,
    #[serde(default)]
    pub ips: Vec<String>,
}

impl WlanInfo {
    pub fn connected(&self) -> bool {
        self.state.connected()
    }

    pub fn connecting(&self) -> bool {
        self.state.connecting()
    }

    pub fn enabled(&self) -> bool {
        self.state.enabled()
    }
}

/// Wired interface state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NetInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: LinkState,
    #[serde(default)]
    pub ips: Vec<String>,
}

impl NetInfo {
    pub fn connected(&self) -> bool {
        self.state.connected()
    }

    pub fn connecting(&self) -> bool {
        self.state.connecting()
    }

    pub fn enabled(&self) -> bool {
        self.state.enabled()
    }
}

/// Transfer rates in bytes per second
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NetSpeeds {
    pub tx: f64,
    pub rx: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_state_predicates() {
        assert!(!LinkState::NotPresent.enabled());
        assert!(!LinkState::Disabled.enabled());
        assert!(LinkState::Down.enabled());
        assert!(LinkState::Connecting.enabled() && LinkState::Connecting.connecting());
        assert!(LinkState::Connected.enabled() && LinkState::Connected.connected());
    }

    #[test]
    fn test_wlan_defaults_from_json() {
        let info: WlanInfo = serde_json::from_str(r#"{"state":"connected","ssid":"home"}"#).unwrap();
        assert!(info.connected());
        assert!(info.ips.is_empty());
    }

    #[test]
    fn test_link_state_names() {
        let names: Vec<String> = [
            LinkState::NotPresent,
            LinkState::Disabled,
            LinkState::Down,
            LinkState::Connecting,
            LinkState::Connected,
        ]
        .iter()
        .map(|state| serde_json::to_string(state).unwrap())
        .collect();
        assert_eq!(
            names,
            ["\"not_present\"", "\"disabled\"", "\"down\"", "\"connecting\"", "\"connected\""]
        );
        assert_eq!(LinkState::default(), LinkState::NotPresent);
    }
}
