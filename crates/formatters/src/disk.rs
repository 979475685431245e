//! Disk space formatter

use barline_core::text::ibytes;
use barline_core::threshold::{self, FREE_FRACTION};
use barline_core::{kind_mismatch, BoxedFormatter, FormatContext, FormatResult, ItemFormatter};
use barline_types::{ColorScheme, DiskInfo, DiskSpaceConfig, Snapshot, SourceKind, SourceSpec, StyledOutput};
use std::sync::Arc;

use crate::spec_mismatch;

/// Shows free space on one mount point, e.g. `HOME 41.2 GiB`.
/// Bad below 20% free, degraded below 33%.
pub struct DiskFormatter {
    label: String,
    scheme: Arc<ColorScheme>,
}

impl DiskFormatter {
    pub fn new(config: &DiskSpaceConfig, scheme: Arc<ColorScheme>) -> Self {
        Self {
            label: config.display_label(),
            scheme,
        }
    }

    fn format_info(&self, info: &DiskInfo) -> StyledOutput {
        let out = StyledOutput::text(format!("{} {}", self.label, ibytes(info.available)));
        threshold::apply(out, FREE_FRACTION.classify(info.avail_frac()), &self.scheme)
    }
}

impl ItemFormatter for DiskFormatter {
    fn id(&self) -> &str {
        SourceKind::DiskSpace.id()
    }

    fn kind(&self) -> SourceKind {
        SourceKind::DiskSpace
    }

    fn format(&self, snapshot: &Snapshot, _ctx: &FormatContext) -> FormatResult<Option<StyledOutput>> {
        match snapshot {
            Snapshot::DiskSpace(info) => Ok(Some(self.format_info(info))),
            other => Err(kind_mismatch(self.kind(), other)),
        }
    }
}

pub(crate) fn create(spec: &SourceSpec, scheme: Arc<ColorScheme>) -> FormatResult<BoxedFormatter> {
    match spec {
        SourceSpec::DiskSpace(config) => Ok(Box::new(DiskFormatter::new(config, scheme))),
        other => Err(spec_mismatch(SourceKind::DiskSpace, other)),
    }
}
