//! Clock formatter

use barline_core::{kind_mismatch, BoxedFormatter, FormatContext, FormatError, FormatResult, ItemFormatter};
use barline_types::{ClockConfig, ClockTick, ColorScheme, Snapshot, SourceKind, SourceSpec, StyledOutput};
use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use chrono_tz::Tz;
use log::debug;
use std::fmt::Write;
use std::sync::Arc;

use crate::spec_mismatch;

/// Timezone resolved once at construction
#[derive(Debug, Clone, Copy)]
enum Zone {
    Local,
    Named(Tz),
}

/// Date and time of each clock tick, in a fixed timezone
pub struct ClockFormatter {
    zone: Zone,
    format: String,
}

impl ClockFormatter {
    pub fn new(config: &ClockConfig) -> FormatResult<Self> {
        let zone = if config.timezone == "Local" {
            Zone::Local
        } else {
            let tz = config
                .timezone
                .parse::<Tz>()
                .map_err(|_| FormatError::InvalidTimezone(config.timezone.clone()))?;
            Zone::Named(tz)
        };
        if StrftimeItems::new(&config.format).any(|item| matches!(item, Item::Error)) {
            return Err(FormatError::InvalidFormat(config.format.clone()));
        }
        debug!("Clock in {:?} formatted as {:?}", zone, config.format);
        Ok(Self {
            zone,
            format: config.format.clone(),
        })
    }

    fn format_tick(&self, tick: &ClockTick) -> FormatResult<String> {
        let mut text = String::new();
        let written = match self.zone {
            Zone::Local => write!(text, "{}", tick.at.with_timezone(&Local).format(&self.format)),
            Zone::Named(tz) => write!(text, "{}", tick.at.with_timezone(&tz).format(&self.format)),
        };
        written.map_err(|_| FormatError::InvalidFormat(self.format.clone()))?;
        Ok(text)
    }
}

impl ItemFormatter for ClockFormatter {
    fn id(&self) -> &str {
        SourceKind::Clock.id()
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Clock
    }

    fn format(&self, snapshot: &Snapshot, _ctx: &FormatContext) -> FormatResult<Option<StyledOutput>> {
        match snapshot {
            Snapshot::Clock(tick) => Ok(Some(StyledOutput::text(self.format_tick(tick)?))),
            other => Err(kind_mismatch(self.kind(), other)),
        }
    }
}

pub(crate) fn create(spec: &SourceSpec, _scheme: Arc<ColorScheme>) -> FormatResult<BoxedFormatter> {
    match spec {
        SourceSpec::Clock(config) => Ok(Box::new(ClockFormatter::new(config)?)),
        other => Err(spec_mismatch(SourceKind::Clock, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ctx;

    fn tick() -> Snapshot {
        Snapshot::Clock(ClockTick { at: ctx().now })
    }

    #[test]
    fn test_named_timezone() {
        let config = ClockConfig {
            timezone: "Asia/Tehran".to_string(),
            format: "%Y-%m-%d %H:%M:%S".to_string(),
        };
        let out = ClockFormatter::new(&config).unwrap().format(&tick(), &ctx()).unwrap().unwrap();
        // 14:05:07 UTC is 17:35:07 in Tehran (UTC+3:30, no DST in 2024)
        assert_eq!(out.plain_text(), "2024-03-09 17:35:07");
    }

    #[test]
    fn test_utc() {
        let config = ClockConfig {
            timezone: "UTC".to_string(),
            format: "%H:%M".to_string(),
        };
        let out = ClockFormatter::new(&config).unwrap().format(&tick(), &ctx()).unwrap().unwrap();
        assert_eq!(out.plain_text(), "14:05");
    }

    #[test]
    fn test_local_default_formats() {
        let f = ClockFormatter::new(&ClockConfig::default()).unwrap();
        let out = f.format(&tick(), &ctx()).unwrap().unwrap();
        assert_eq!(out.plain_text().len(), "2024-03-09 14:05:07".len());
    }

    #[test]
    fn test_invalid_config() {
        let bad_tz = ClockConfig {
            timezone: "Mars/Olympus".to_string(),
            ..ClockConfig::default()
        };
        assert!(matches!(ClockFormatter::new(&bad_tz), Err(FormatError::InvalidTimezone(_))));
        let bad_format = ClockConfig {
            format: "%Q".to_string(),
            ..ClockConfig::default()
        };
        assert!(matches!(ClockFormatter::new(&bad_format), Err(FormatError::InvalidFormat(_))));
    }
}
