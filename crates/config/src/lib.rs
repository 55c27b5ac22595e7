//! Configuration for kindstore.
//!
//! This crate provides [`StoreOptions`], which controls how a store
//! classifies values and whether it reports operations through `tracing`.

#![warn(missing_docs)]

use kindstore_core::Result;
use serde::{Deserialize, Serialize};

pub use kindstore_core::NumericGrammar;

/// Options for opening a store.
///
/// Use the builder pattern to configure options:
///
/// ```ignore
/// use kindstore_config::StoreOptions;
/// use kindstore_core::NumericGrammar;
///
/// let opts = StoreOptions::new()
///     .grammar(NumericGrammar::Float)
///     .trace_operations(true);
/// ```
///
/// Options can also be read from JSON; missing fields keep their defaults:
///
/// ```ignore
/// let opts = StoreOptions::from_json(r#"{"grammar": "float"}"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreOptions {
    /// Grammar deciding which values are numeric.
    pub grammar: NumericGrammar,
    /// Emit `tracing` events on open and on every operation.
    pub trace_operations: bool,
    /// Number of keys to pre-allocate room for.
    pub initial_capacity: usize,
}

impl StoreOptions {
    /// Create a new `StoreOptions` with default settings (integer grammar, no tracing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the numeric grammar.
    pub fn grammar(mut self, grammar: NumericGrammar) -> Self {
        self.grammar = grammar;
        self
    }

    /// Enable or disable operation tracing.
    pub fn trace_operations(mut self, enabled: bool) -> Self {
        self.trace_operations = enabled;
        self
    }

    /// Set the initial key capacity.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Parse options from JSON text.
    ///
    /// Unknown fields and malformed JSON return `Error::InvalidOptions`.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Render options as JSON text.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            grammar: NumericGrammar::Integer,
            trace_operations: false,
            initial_capacity: 0,
        }
    }
}
