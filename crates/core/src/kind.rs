//! Value classification tag

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a stored value
///
/// `Numeric` and `Textual` describe entries that exist in a store.
/// `Unknown` is never stored; it is the not-found answer of a kind lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// The raw text satisfied the store's numeric grammar.
    Numeric,
    /// The raw text did not parse as a number.
    Textual,
    /// No entry exists for the key.
    Unknown,
}

impl Kind {
    /// Lowercase name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Numeric => "numeric",
            Kind::Textual => "textual",
            Kind::Unknown => "unknown",
        }
    }

    /// True for kinds that can belong to a stored entry.
    pub fn is_known(&self) -> bool {
        !matches!(self, Kind::Unknown)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
