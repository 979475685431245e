//! Media player formatter
//!
//! While a track is playing the elapsed time has to keep ticking even
//! though the player sends no new snapshot, so this formatter asks the
//! dispatcher to re-run it every second with the last snapshot.

use barline_core::text::{fit_pair, format_duration, PairBudget};
use barline_core::{
    kind_mismatch, BoxedFormatter, FormatContext, FormatError, FormatResult, ItemFormatter,
    LIVE_REFRESH_INTERVAL,
};
use barline_types::{
    Color, ColorScheme, Fragment, MediaConfig, MediaInfo, PlaybackStatus, Snapshot, SourceKind,
    SourceSpec, StyledOutput,
};
use chrono::{DateTime, Utc};
use log::trace;
use std::sync::Arc;
use std::time::Duration;

use crate::{spacer, spec_mismatch};

const DEFAULT_ICON_COLOR: &str = "#f70";

fn out_of_range(field: &str) -> FormatError {
    FormatError::malformed(SourceKind::Media, format!("track {} out of range", field))
}

/// Now-playing item: `♫ 1:02/ 3:45  Title - Artist`
pub struct MediaFormatter {
    player: Option<String>,
    budget: PairBudget,
    icon_color: Color,
}

impl MediaFormatter {
    pub fn new(config: &MediaConfig) -> FormatResult<Self> {
        let hex = config.icon_color.as_deref().unwrap_or(DEFAULT_ICON_COLOR);
        let icon_color = Color::from_hex(hex).map_err(|e| FormatError::InvalidFormat(e.to_string()))?;
        Ok(Self {
            player: config.player.clone(),
            budget: PairBudget {
                total: config.total_budget,
                first_cap: config.artist_cap,
                rebalance_below: config.rebalance_below,
            },
            icon_color,
        })
    }

    fn tracks(&self, m: &MediaInfo) -> bool {
        self.player.as_deref().map_or(true, |p| p == m.player)
    }

    fn icon_and_position(&self, m: &MediaInfo, now: DateTime<Utc>) -> FormatResult<StyledOutput> {
        let mut fragments = vec![Fragment::icon("fa-music").color(self.icon_color)];
        if m.status == PlaybackStatus::Playing {
            let position = m.position(now).ok_or_else(|| out_of_range("position"))?;
            fragments.push(spacer());
            fragments.push(Fragment::text(format!("{}/", format_duration(position))));
        }
        if matches!(m.status, PlaybackStatus::Paused | PlaybackStatus::Playing) {
            let length = m.length().ok_or_else(|| out_of_range("length"))?;
            fragments.push(spacer());
            fragments.push(Fragment::text(format_duration(length)));
        }
        Ok(StyledOutput::from_fragments(fragments))
    }

    fn format_info(&self, m: &MediaInfo, now: DateTime<Utc>) -> FormatResult<Option<StyledOutput>> {
        if matches!(m.status, PlaybackStatus::Stopped | PlaybackStatus::Disconnected) {
            return Ok(None);
        }
        if !self.tracks(m) {
            trace!("Ignoring media snapshot from player {:?}", m.player);
            return Ok(None);
        }
        let (artist, title) = fit_pair(&m.artist, &m.title, self.budget);
        Ok(Some(StyledOutput::group([
            self.icon_and_position(m, now)?,
            StyledOutput::text(format!("{} - {}", title, artist)),
        ])))
    }
}

impl ItemFormatter for MediaFormatter {
    fn id(&self) -> &str {
        SourceKind::Media.id()
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Media
    }

    fn format(&self, snapshot: &Snapshot, ctx: &FormatContext) -> FormatResult<Option<StyledOutput>> {
        match snapshot {
            Snapshot::Media(m) => self.format_info(m, ctx.now),
            other => Err(kind_mismatch(self.kind(), other)),
        }
    }

    fn refresh_interval(&self, snapshot: &Snapshot) -> Option<Duration> {
        match snapshot {
            Snapshot::Media(m) if m.playing() && self.tracks(m) => Some(LIVE_REFRESH_INTERVAL),
            _ => None,
        }
    }
}

pub(crate) fn create(spec: &SourceSpec, _scheme: Arc<ColorScheme>) -> FormatResult<BoxedFormatter> {
    match spec {
        SourceSpec::Media(config) => Ok(Box::new(MediaFormatter::new(config)?)),
        other => Err(spec_mismatch(SourceKind::Media, other)),
    }
}
