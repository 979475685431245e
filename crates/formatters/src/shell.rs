//! Shell command output formatter

use barline_core::{kind_mismatch, BoxedFormatter, FormatContext, FormatError, FormatResult, ItemFormatter};
use barline_types::{ColorScheme, CommandOutput, ShellConfig, ShellFormat, Snapshot, SourceKind, SourceSpec, StyledOutput};
use std::sync::Arc;

use crate::spec_mismatch;

/// Shows a command's output, optionally re-arranging its fields.
/// Empty output makes the item absent.
pub struct ShellFormatter {
    id: String,
    format: ShellFormat,
}

impl ShellFormatter {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            id: format!("{}:{}", SourceKind::Shell.id(), config.command),
            format: config.format.clone(),
        }
    }

    fn format_output(&self, output: &CommandOutput) -> FormatResult<Option<StyledOutput>> {
        let stdout = output.stdout.trim();
        if stdout.is_empty() {
            return Ok(None);
        }
        let text = match &self.format {
            ShellFormat::Raw => stdout.to_string(),
            ShellFormat::Fields { pick, separator } => {
                let fields: Vec<&str> = stdout.split(separator.as_str()).collect();
                let picked = pick
                    .iter()
                    .map(|&i| {
                        fields.get(i).copied().ok_or_else(|| {
                            FormatError::malformed(
                                SourceKind::Shell,
                                format!("wanted field {} of {:?}, output has {}", i, stdout, fields.len()),
                            )
                        })
                    })
                    .collect::<FormatResult<Vec<&str>>>()?;
                picked.join(" ")
            }
        };
        Ok(Some(StyledOutput::text(text)))
    }
}

impl ItemFormatter for ShellFormatter {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Shell
    }

    fn format(&self, snapshot: &Snapshot, _ctx: &FormatContext) -> FormatResult<Option<StyledOutput>> {
        match snapshot {
            Snapshot::Shell(output) => self.format_output(output),
            other => Err(kind_mismatch(self.kind(), other)),
        }
    }
}

pub(crate) fn create(spec: &SourceSpec, _scheme: Arc<ColorScheme>) -> FormatResult<BoxedFormatter> {
    match spec {
        SourceSpec::Shell(config) => Ok(Box::new(ShellFormatter::new(config))),
        other => Err(spec_mismatch(SourceKind::Shell, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ctx;

    fn output(stdout: &str) -> Snapshot {
        Snapshot::Shell(CommandOutput {
            stdout: stdout.to_string(),
        })
    }

    fn date_picker() -> ShellFormatter {
        ShellFormatter::new(&ShellConfig::new("jdate", &[]).with_format(ShellFormat::Fields {
            pick: vec![2, 1],
            separator: " ".to_string(),
        }))
    }

    #[test]
    fn test_raw_output_trimmed() {
        let f = ShellFormatter::new(&ShellConfig::new("curl", &["-s", "ifconfig.io/country_code"]));
        let out = f.format(&output("NL\n"), &ctx()).unwrap().unwrap();
        assert_eq!(out.plain_text(), "NL");
        assert_eq!(f.id(), "shell:curl");
    }

    #[test]
    fn test_empty_output_is_absent() {
        let f = ShellFormatter::new(&ShellConfig::new("true", &[]));
        assert_eq!(f.format(&output("  \n"), &ctx()).unwrap(), None);
    }

    #[test]
    fn test_pick_fields() {
        let out = date_picker()
            .format(&output("Sat 18 Farvardin 1403\n"), &ctx())
            .unwrap()
            .unwrap();
        assert_eq!(out.plain_text(), "Farvardin 18");
    }

    #[test]
    fn test_too_few_fields_fails() {
        let err = date_picker().format(&output("Sat 18"), &ctx()).unwrap_err();
        assert!(matches!(err, FormatError::MalformedSnapshot { .. }));
    }
}
