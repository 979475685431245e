//! Media player snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::secs_to_duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackStatus {
    #[default]
    Disconnected,
    Stopped,
    Paused,
    Playing,
}

/// Now-playing information.
///
/// `position_secs` is the playback position sampled at `position_at`.
/// While playing, the current position is extrapolated from that sample,
/// which is what lets the elapsed-time counter tick without a new snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaInfo {
    #[serde(default)]
    pub player: String,
    #[serde(default)]
    pub status: PlaybackStatus,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub length_secs: f64,
    #[serde(default)]
    pub position_secs: f64,
    pub position_at: DateTime<Utc>,
}

impl MediaInfo {
    pub fn playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    /// Track length; `None` when it is too large to represent
    pub fn length(&self) -> Option<Duration> {
        secs_to_duration(self.length_secs)
    }

    /// Playback position as of `now`, never past the track length
    pub fn position(&self, now: DateTime<Utc>) -> Option<Duration> {
        let mut secs = self.position_secs.max(0.0);
        if self.playing() {
            let elapsed = (now - self.position_at).num_milliseconds().max(0) as f64 / 1000.0;
            secs += elapsed;
        }
        if self.length_secs > 0.0 {
            secs = secs.min(self.length_secs);
        }
        secs_to_duration(secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn info(status: PlaybackStatus) -> MediaInfo {
        MediaInfo {
            player: "mpd".into(),
            status,
            artist: "Artist".into(),
            title: "Title".into(),
            length_secs: 200.0,
            position_secs: 10.0,
            position_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_position_advances_while_playing() {
        let m = info(PlaybackStatus::Playing);
        let later = m.position_at + chrono::Duration::seconds(5);
        assert_eq!(m.position(later).map(|p| p.as_secs()), Some(15));
    }

    #[test]
    fn test_position_frozen_while_paused() {
        let m = info(PlaybackStatus::Paused);
        let later = m.position_at + chrono::Duration::seconds(5);
        assert_eq!(m.position(later).map(|p| p.as_secs()), Some(10));
    }

    #[test]
    fn test_position_clamped_to_length() {
        let m = info(PlaybackStatus::Playing);
        let later = m.position_at + chrono::Duration::seconds(1000);
        assert_eq!(m.position(later).map(|p| p.as_secs()), Some(200));
    }

    #[test]
    fn test_out_of_range_times() {
        let mut m = info(PlaybackStatus::Paused);
        m.length_secs = 1e20;
        assert_eq!(m.length(), None);

        let mut m = info(PlaybackStatus::Paused);
        m.length_secs = 0.0;
        m.position_secs = f64::INFINITY;
        assert_eq!(m.position(m.position_at), None);

        m.position_secs = f64::NAN;
        assert_eq!(m.position(m.position_at), Some(Duration::ZERO));
    }
}
