//! Numeric grammar and parsed numbers
//!
//! A store classifies each written value by trying to parse it with one
//! [`NumericGrammar`]. Text that parses is `Numeric` and keeps its parsed
//! [`Number`]; everything else is `Textual`.
//!
//! # Grammars
//!
//! | Grammar   | Accepts                                   | `"3.5"`  | `"42"`  |
//! |-----------|-------------------------------------------|----------|---------|
//! | `Integer` | optional sign + ASCII digits, fits in i64 | Textual  | Numeric |
//! | `Float`   | Rust f64 literal grammar, `inf`, `nan`    | Numeric  | Numeric |
//!
//! Neither grammar trims whitespace: `" 42"` is Textual under both.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Parsed numeric form of a stored value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Number {
    /// Produced by [`NumericGrammar::Integer`]
    Integer(i64),
    /// Produced by [`NumericGrammar::Float`]
    Float(f64),
}

impl Number {
    /// Widen to f64. Integers beyond 2^53 lose precision.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// The integer value, if this number came from the integer grammar.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Integer(i) => Some(i),
            Number::Float(_) => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

/// Which text counts as a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericGrammar {
    /// Signed 64-bit integers only (default).
    #[default]
    Integer,
    /// Any 64-bit floating point literal, integers included.
    Float,
}

impl NumericGrammar {
    /// Parse `text` under this grammar
    ///
    /// Returns `None` when the text is not a number in this grammar. This is
    /// the whole classification rule: `Some` means Numeric, `None` Textual.
    pub fn parse(&self, text: &str) -> Option<Number> {
        match self {
            NumericGrammar::Integer => text.parse::<i64>().ok().map(Number::Integer),
            NumericGrammar::Float => text.parse::<f64>().ok().map(Number::Float),
        }
    }
}
