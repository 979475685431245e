//! Memory formatter

use barline_core::text::ibytes;
use barline_core::threshold::{self, FREE_FRACTION};
use barline_core::{kind_mismatch, BoxedFormatter, FormatContext, FormatResult, ItemFormatter, BYTES_PER_GIB};
use barline_types::{ColorScheme, MemInfo, SeverityTier, Snapshot, SourceKind, SourceSpec, StyledOutput};
use std::sync::Arc;

use crate::spec_mismatch;

/// `used/available`; an explicit `MEMORY < x` warning under 1 GiB available
pub struct MemoryFormatter {
    scheme: Arc<ColorScheme>,
}

impl MemoryFormatter {
    pub fn new(scheme: Arc<ColorScheme>) -> Self {
        Self { scheme }
    }

    fn format_info(&self, m: &MemInfo) -> StyledOutput {
        if (m.available as f64) < BYTES_PER_GIB {
            return StyledOutput::text(format!("MEMORY < {}", ibytes(m.available)))
                .apply_tier(SeverityTier::Bad, &self.scheme);
        }
        let out = StyledOutput::text(format!("{}/{}", ibytes(m.used()), ibytes(m.available)));
        threshold::apply(out, FREE_FRACTION.classify(m.avail_frac()), &self.scheme)
    }
}

impl ItemFormatter for MemoryFormatter {
    fn id(&self) -> &str {
        SourceKind::Memory.id()
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Memory
    }

    fn format(&self, snapshot: &Snapshot, _ctx: &FormatContext) -> FormatResult<Option<StyledOutput>> {
        match snapshot {
            Snapshot::Memory(info) => Ok(Some(self.format_info(info))),
            other => Err(kind_mismatch(self.kind(), other)),
        }
    }
}

pub(crate) fn create(spec: &SourceSpec, scheme: Arc<ColorScheme>) -> FormatResult<BoxedFormatter> {
    match spec {
        SourceSpec::Memory => Ok(Box::new(MemoryFormatter::new(scheme))),
        other => Err(spec_mismatch(SourceKind::Memory, other)),
    }
}
