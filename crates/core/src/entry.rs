//! Stored record for one key

use crate::kind::Kind;
use crate::number::{Number, NumericGrammar};
use serde::Serialize;

/// One stored binding
///
/// Holds the caller's text verbatim and, when that text satisfied the
/// store's grammar, its parsed number. The kind is derived from the number,
/// so an entry can only ever be `Numeric` or `Textual`.
///
/// Entries are built whole by [`Entry::classify`] and never mutated.
/// They serialize for inspection but cannot be deserialized, since that
/// would bypass classification:
///
/// ```compile_fail
/// let entry: kindstore_core::Entry =
///     serde_json::from_str(r#"{"raw":"abc","number":{"Integer":5}}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    raw: String,
    number: Option<Number>,
}

impl Entry {
    /// Classify `raw` under `grammar` and build the entry
    ///
    /// # Arguments
    ///
    /// * `raw` - The caller's value, kept exactly as given
    /// * `grammar` - Grammar deciding whether `raw` is numeric
    pub fn classify(raw: impl Into<String>, grammar: NumericGrammar) -> Self {
        let raw = raw.into();
        let number = grammar.parse(&raw);
        Self { raw, number }
    }

    /// The value exactly as written
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parsed numeric form, `None` for textual entries
    pub fn number(&self) -> Option<Number> {
        self.number
    }

    /// `Numeric` or `Textual`, never `Unknown`
    pub fn kind(&self) -> Kind {
        if self.number.is_some() {
            Kind::Numeric
        } else {
            Kind::Textual
        }
    }
}
