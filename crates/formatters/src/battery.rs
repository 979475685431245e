//! Battery formatter

use barline_core::text::format_remaining;
use barline_core::threshold::{self, classify};
use barline_core::{kind_mismatch, BoxedFormatter, FormatContext, FormatError, FormatResult, ItemFormatter};
use barline_types::{BatteryInfo, BatteryStatus, ColorScheme, Snapshot, SourceKind, SourceSpec, StyledOutput};
use std::sync::Arc;
use std::time::Duration;

use crate::spec_mismatch;

const LOW_PCT: u32 = 20;
const LOW_TIME: Duration = Duration::from_secs(30 * 60);

fn status_name(status: BatteryStatus) -> &'static str {
    match status {
        BatteryStatus::Charging => "CHR",
        BatteryStatus::Discharging => "BAT",
        BatteryStatus::NotCharging => "NOT",
        _ => "UNK",
    }
}

/// `BAT 57% 2h10m`. Bad while discharging with under 20% or under 30
/// minutes left; either condition alone is enough.
pub struct BatteryFormatter {
    scheme: Arc<ColorScheme>,
}

impl BatteryFormatter {
    pub fn new(scheme: Arc<ColorScheme>) -> Self {
        Self { scheme }
    }

    fn format_info(&self, b: &BatteryInfo) -> FormatResult<Option<StyledOutput>> {
        match b.status {
            BatteryStatus::Disconnected => return Ok(None),
            BatteryStatus::Full => return Ok(Some(StyledOutput::text("FULL"))),
            _ => {}
        }
        let pct = b.remaining_pct();
        let remaining = b
            .remaining_time()
            .ok_or_else(|| FormatError::malformed(SourceKind::Battery, "remaining time out of range"))?;
        let out = StyledOutput::text(format!(
            "{} {}% {}",
            status_name(b.status),
            pct,
            format_remaining(remaining)
        ));
        let low = b.discharging() && (pct < LOW_PCT || remaining < LOW_TIME);
        Ok(Some(threshold::apply(out, classify(false, &[low]), &self.scheme)))
    }
}

impl ItemFormatter for BatteryFormatter {
    fn id(&self) -> &str {
        SourceKind::Battery.id()
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Battery
    }

    fn format(&self, snapshot: &Snapshot, _ctx: &FormatContext) -> FormatResult<Option<StyledOutput>> {
        match snapshot {
            Snapshot::Battery(info) => self.format_info(info),
            other => Err(kind_mismatch(self.kind(), other)),
        }
    }
}

pub(crate) fn create(spec: &SourceSpec, scheme: Arc<ColorScheme>) -> FormatResult<BoxedFormatter> {
    match spec {
        SourceSpec::Battery => Ok(Box::new(BatteryFormatter::new(scheme))),
        other => Err(spec_mismatch(SourceKind::Battery, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ctx, scheme};
    use barline_types::SeverityTier;

    fn format(status: BatteryStatus, energy_now: f64, power: f64) -> Option<StyledOutput> {
        let snapshot = Snapshot::Battery(BatteryInfo {
            status,
            energy_now,
            energy_full: 50.0,
            power,
        });
        BatteryFormatter::new(scheme()).format(&snapshot, &ctx()).unwrap()
    }

    #[test]
    fn test_discharging_healthy() {
        let out = format(BatteryStatus::Discharging, 40.0, 10.0).unwrap();
        assert_eq!(out.plain_text(), "BAT 80% 4h00m");
        assert_eq!(out.tier(), None);
    }

    #[test]
    fn test_low_percent_alone_is_bad() {
        // 15% but a long runtime thanks to a tiny draw
        let out = format(BatteryStatus::Discharging, 7.5, 1.0).unwrap();
        assert_eq!(out.tier(), Some(SeverityTier::Bad));
    }

    #[test]
    fn test_low_time_alone_is_bad() {
        // 80% but a huge draw: 40 Wh / 100 W = 24 minutes
        let out = format(BatteryStatus::Discharging, 40.0, 100.0).unwrap();
        assert_eq!(out.plain_text(), "BAT 80% 24m");
        assert_eq!(out.tier(), Some(SeverityTier::Bad));
    }

    #[test]
    fn test_charging_never_bad() {
        let out = format(BatteryStatus::Charging, 5.0, 10.0).unwrap();
        assert!(out.plain_text().starts_with("CHR 10%"));
        assert_eq!(out.tier(), None);
    }

    #[test]
    fn test_full_and_disconnected() {
        assert_eq!(format(BatteryStatus::Full, 50.0, 0.0).unwrap().plain_text(), "FULL");
        assert_eq!(format(BatteryStatus::Disconnected, 0.0, 0.0), None);
    }

    #[test]
    fn test_vanishing_power_is_malformed() {
        let snapshot = Snapshot::Battery(BatteryInfo {
            status: BatteryStatus::Discharging,
            energy_now: 50.0,
            energy_full: 60.0,
            power: 1e-15,
        });
        let err = BatteryFormatter::new(scheme()).format(&snapshot, &ctx()).unwrap_err();
        assert!(matches!(err, FormatError::MalformedSnapshot { .. }));
    }
}
