//! Network formatters: wifi link, wired link, throughput

use barline_core::text::byterate;
use barline_core::{kind_mismatch, BoxedFormatter, FormatContext, FormatResult, ItemFormatter};
use barline_types::{
    ColorScheme, Fragment, NetInfo, NetSpeeds, SeverityTier, Snapshot, SourceKind, SourceSpec,
    StyledOutput, TextSize, WlanInfo,
};
use std::sync::Arc;

use crate::{spacer, spec_mismatch};

/// Width of each rate column, so the item does not jitter
const RATE_WIDTH: usize = 7;

/// Wireless link status. Absent when there is no enabled wireless device.
pub struct WifiFormatter {
    scheme: Arc<ColorScheme>,
}

impl WifiFormatter {
    pub fn new(scheme: Arc<ColorScheme>) -> Self {
        Self { scheme }
    }

    fn format_info(&self, w: &WlanInfo) -> Option<StyledOutput> {
        if w.connected() {
            let mut text = format!("W: ({})", w.ssid);
            if let Some(ip) = w.ips.first() {
                text.push(' ');
                text.push_str(ip);
            }
            Some(StyledOutput::text(text).apply_tier(SeverityTier::Normal, &self.scheme))
        } else if w.connecting() {
            Some(StyledOutput::text("W: connecting...").apply_tier(SeverityTier::Degraded, &self.scheme))
        } else if w.enabled() {
            Some(StyledOutput::text("W: down").apply_tier(SeverityTier::Bad, &self.scheme))
        } else {
            None
        }
    }
}

impl ItemFormatter for WifiFormatter {
    fn id(&self) -> &str {
        SourceKind::Wifi.id()
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Wifi
    }

    fn format(&self, snapshot: &Snapshot, _ctx: &FormatContext) -> FormatResult<Option<StyledOutput>> {
        match snapshot {
            Snapshot::Wifi(info) => Ok(self.format_info(info)),
            other => Err(kind_mismatch(self.kind(), other)),
        }
    }
}

/// Wired link status with its first address
pub struct WiredFormatter {
    scheme: Arc<ColorScheme>,
}

impl WiredFormatter {
    pub fn new(scheme: Arc<ColorScheme>) -> Self {
        Self { scheme }
    }

    fn format_info(&self, s: &NetInfo) -> Option<StyledOutput> {
        if s.connected() {
            let ip = s.ips.first().map(String::as_str).unwrap_or("<no ip>");
            Some(StyledOutput::text(format!("E: {}", ip)).apply_tier(SeverityTier::Normal, &self.scheme))
        } else if s.connecting() {
            Some(StyledOutput::text("E: connecting...").apply_tier(SeverityTier::Degraded, &self.scheme))
        } else if s.enabled() {
            Some(StyledOutput::text("E: down").apply_tier(SeverityTier::Bad, &self.scheme))
        } else {
            None
        }
    }
}

impl ItemFormatter for WiredFormatter {
    fn id(&self) -> &str {
        SourceKind::Wired.id()
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Wired
    }

    fn format(&self, snapshot: &Snapshot, _ctx: &FormatContext) -> FormatResult<Option<StyledOutput>> {
        match snapshot {
            Snapshot::Wired(info) => Ok(self.format_info(info)),
            other => Err(kind_mismatch(self.kind(), other)),
        }
    }
}

/// Upload and download rates with arrow icons
pub struct ThroughputFormatter;

impl ThroughputFormatter {
    fn format_speeds(&self, s: &NetSpeeds) -> StyledOutput {
        StyledOutput::from_fragments(vec![
            Fragment::icon("fa-upload").alpha(0.5),
            spacer(),
            Fragment::text(byterate(s.tx)).min_width(RATE_WIDTH),
            Fragment::text(" ").size(TextSize::Small),
            Fragment::icon("fa-download").alpha(0.5),
            spacer(),
            Fragment::text(byterate(s.rx)).min_width(RATE_WIDTH),
        ])
    }
}

impl ItemFormatter for ThroughputFormatter {
    fn id(&self) -> &str {
        SourceKind::Throughput.id()
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Throughput
    }

    fn format(&self, snapshot: &Snapshot, _ctx: &FormatContext) -> FormatResult<Option<StyledOutput>> {
        match snapshot {
            Snapshot::Throughput(speeds) => Ok(Some(self.format_speeds(speeds))),
            other => Err(kind_mismatch(self.kind(), other)),
        }
    }
}

pub(crate) fn create_wifi(spec: &SourceSpec, scheme: Arc<ColorScheme>) -> FormatResult<BoxedFormatter> {
    match spec {
        SourceSpec::Wifi => Ok(Box::new(WifiFormatter::new(scheme))),
        other => Err(spec_mismatch(SourceKind::Wifi, other)),
    }
}

pub(crate) fn create_wired(spec: &SourceSpec, scheme: Arc<ColorScheme>) -> FormatResult<BoxedFormatter> {
    match spec {
        SourceSpec::Wired(_) => Ok(Box::new(WiredFormatter::new(scheme))),
        other => Err(spec_mismatch(SourceKind::Wired, other)),
    }
}

pub(crate) fn create_throughput(spec: &SourceSpec, _scheme: Arc<ColorScheme>) -> FormatResult<BoxedFormatter> {
    match spec {
        SourceSpec::Throughput(_) => Ok(Box::new(ThroughputFormatter)),
        other => Err(spec_mismatch(SourceKind::Throughput, other)),
    }
}
