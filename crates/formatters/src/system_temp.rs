//! CPU temperature formatter

use barline_core::threshold::{self, Boundaries};
use barline_core::{kind_mismatch, BoxedFormatter, FormatContext, FormatResult, ItemFormatter};
use barline_types::{
    ColorScheme, CpuTemperatureConfig, Fragment, Snapshot, SourceKind, SourceSpec, StyledOutput, Temperature,
};
use std::sync::Arc;

use crate::{spacer, spec_mismatch};

/// Fan icon and whole degrees Celsius
pub struct CpuTemperatureFormatter {
    boundaries: Boundaries,
    scheme: Arc<ColorScheme>,
}

impl CpuTemperatureFormatter {
    pub fn new(config: &CpuTemperatureConfig, scheme: Arc<ColorScheme>) -> Self {
        Self {
            boundaries: Boundaries::above(config.bad_above, config.degraded_above)
                .with_urgent(config.urgent_above),
            scheme,
        }
    }

    fn format_temp(&self, temp: &Temperature) -> StyledOutput {
        let celsius = temp.celsius();
        let out = StyledOutput::from_fragments(vec![
            Fragment::icon("mdi-fan").alpha(0.6),
            spacer(),
            Fragment::text(format!("{:2}℃", celsius.trunc() as i64)),
        ]);
        threshold::apply(out, self.boundaries.classify(celsius), &self.scheme)
    }
}

impl ItemFormatter for CpuTemperatureFormatter {
    fn id(&self) -> &str {
        SourceKind::CpuTemperature.id()
    }

    fn kind(&self) -> SourceKind {
        SourceKind::CpuTemperature
    }

    fn format(&self, snapshot: &Snapshot, _ctx: &FormatContext) -> FormatResult<Option<StyledOutput>> {
        match snapshot {
            Snapshot::CpuTemperature(temp) => Ok(Some(self.format_temp(temp))),
            other => Err(kind_mismatch(self.kind(), other)),
        }
    }
}

pub(crate) fn create(spec: &SourceSpec, scheme: Arc<ColorScheme>) -> FormatResult<BoxedFormatter> {
    match spec {
        SourceSpec::CpuTemperature(config) => Ok(Box::new(CpuTemperatureFormatter::new(config, scheme))),
        other => Err(spec_mismatch(SourceKind::CpuTemperature, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ctx, scheme};
    use barline_types::SeverityTier;

    fn format(celsius: f64) -> StyledOutput {
        let snapshot = Snapshot::CpuTemperature(Temperature::from_celsius(celsius));
        CpuTemperatureFormatter::new(&CpuTemperatureConfig::default(), scheme())
            .format(&snapshot, &ctx())
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_tiers() {
        let cool = format(45.7);
        assert_eq!(cool.plain_text(), " 45℃");
        assert_eq!(cool.tier(), None);
        assert_eq!(format(65.0).tier(), Some(SeverityTier::Degraded));
        assert_eq!(format(75.0).tier(), Some(SeverityTier::Bad));
        let hot = format(91.0);
        assert_eq!(hot.tier(), Some(SeverityTier::Urgent));
        assert!(hot.is_urgent());
    }

    #[test]
    fn test_single_digit_padding() {
        assert_eq!(format(8.0).plain_text(), "  8℃");
    }
}
