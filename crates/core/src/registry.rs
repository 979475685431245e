//! Registry of formatter factories

use barline_types::{ColorScheme, SourceKind, SourceSpec};
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{FormatError, FormatResult};
use crate::formatter::BoxedFormatter;

/// Function that builds a formatter for one bar item
pub type FormatterFactory = fn(&SourceSpec, Arc<ColorScheme>) -> FormatResult<BoxedFormatter>;

/// Registry of formatter factories, one per source kind.
///
/// The registry is an ordinary value owned by whoever assembles the bar;
/// there is no global instance.
pub struct FormatterRegistry {
    factories: HashMap<SourceKind, FormatterFactory>,
}

impl FormatterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a factory, replacing any earlier one for the same kind
    pub fn register(&mut self, kind: SourceKind, factory: FormatterFactory) {
        debug!("Registering formatter for {}", kind);
        self.factories.insert(kind, factory);
    }

    /// Build the formatter for a bar item
    pub fn create(&self, spec: &SourceSpec, scheme: Arc<ColorScheme>) -> FormatResult<BoxedFormatter> {
        let kind = spec.kind();
        let factory = self
            .factories
            .get(&kind)
            .ok_or_else(|| FormatError::UnknownFormatter(kind.to_string()))?;
        let formatter = factory(spec, scheme)?;
        if formatter.kind() != kind {
            return Err(FormatError::KindMismatch {
                expected: kind,
                actual: formatter.kind(),
            });
        }
        Ok(formatter)
    }

    pub fn contains(&self, kind: SourceKind) -> bool {
        self.factories.contains_key(&kind)
    }

    /// List all registered kinds, sorted by id
    pub fn list(&self) -> Vec<SourceKind> {
        let mut kinds: Vec<SourceKind> = self.factories.keys().copied().collect();
        kinds.sort_by_key(|k| k.id());
        kinds
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
