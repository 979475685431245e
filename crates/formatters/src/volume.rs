//! Volume formatter

use barline_core::{kind_mismatch, BoxedFormatter, FormatContext, FormatResult, ItemFormatter};
use barline_types::{ColorScheme, Fragment, SeverityTier, Snapshot, SourceKind, SourceSpec, StyledOutput, VolumeInfo};
use std::sync::Arc;

use crate::{spacer, spec_mismatch};

/// Speaker icon plus percentage; `MUT` in the degraded color when muted
pub struct VolumeFormatter {
    scheme: Arc<ColorScheme>,
}

impl VolumeFormatter {
    pub fn new(scheme: Arc<ColorScheme>) -> Self {
        Self { scheme }
    }

    fn icon_for(pct: u32) -> &'static str {
        if pct > 66 {
            "fa-volume-up"
        } else if pct > 33 {
            "fa-volume-down"
        } else {
            "fa-volume-off"
        }
    }

    fn format_volume(&self, v: &VolumeInfo) -> StyledOutput {
        if v.mute {
            return StyledOutput::from_fragments(vec![
                Fragment::icon("fa-volume-mute").alpha(0.8),
                spacer(),
                Fragment::text("MUT"),
            ])
            .apply_tier(SeverityTier::Degraded, &self.scheme);
        }
        let pct = v.pct();
        StyledOutput::from_fragments(vec![
            Fragment::icon(Self::icon_for(pct)).alpha(0.6),
            spacer(),
            Fragment::text(format!("{:2}%", pct)),
        ])
    }
}

impl ItemFormatter for VolumeFormatter {
    fn id(&self) -> &str {
        SourceKind::Volume.id()
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Volume
    }

    fn format(&self, snapshot: &Snapshot, _ctx: &FormatContext) -> FormatResult<Option<StyledOutput>> {
        match snapshot {
            Snapshot::Volume(v) => Ok(Some(self.format_volume(v))),
            other => Err(kind_mismatch(self.kind(), other)),
        }
    }
}

pub(crate) fn create(spec: &SourceSpec, scheme: Arc<ColorScheme>) -> FormatResult<BoxedFormatter> {
    match spec {
        SourceSpec::Volume(_) => Ok(Box::new(VolumeFormatter::new(scheme))),
        other => Err(spec_mismatch(SourceKind::Volume, other)),
    }
}
