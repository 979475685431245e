//! Load average formatter

use barline_core::threshold::{self, Boundaries};
use barline_core::{kind_mismatch, BoxedFormatter, FormatContext, FormatResult, ItemFormatter};
use barline_types::{ColorScheme, LoadInfo, Snapshot, SourceKind, SourceSpec, StyledOutput};
use std::sync::Arc;

use crate::spec_mismatch;

/// One minute load average; bad above 6.0
pub struct LoadFormatter {
    boundaries: Boundaries,
    scheme: Arc<ColorScheme>,
}

impl LoadFormatter {
    pub fn new(scheme: Arc<ColorScheme>) -> Self {
        Self {
            boundaries: Boundaries::above_only(6.0),
            scheme,
        }
    }

    fn format_info(&self, info: &LoadInfo) -> StyledOutput {
        let load = info.loads[0];
        threshold::apply(
            StyledOutput::text(format!("{:.2}", load)),
            self.boundaries.classify(load),
            &self.scheme,
        )
    }
}

impl ItemFormatter for LoadFormatter {
    fn id(&self) -> &str {
        SourceKind::LoadAverage.id()
    }

    fn kind(&self) -> SourceKind {
        SourceKind::LoadAverage
    }

    fn format(&self, snapshot: &Snapshot, _ctx: &FormatContext) -> FormatResult<Option<StyledOutput>> {
        match snapshot {
            Snapshot::LoadAverage(info) => Ok(Some(self.format_info(info))),
            other => Err(kind_mismatch(self.kind(), other)),
        }
    }
}

pub(crate) fn create(spec: &SourceSpec, scheme: Arc<ColorScheme>) -> FormatResult<BoxedFormatter> {
    match spec {
        SourceSpec::LoadAverage => Ok(Box::new(LoadFormatter::new(scheme))),
        other => Err(spec_mismatch(SourceKind::LoadAverage, other)),
    }
}
