//! Core types for kindstore
//!
//! This crate defines the data model shared by every other crate:
//! - Kind: classification tag returned by reads (Numeric, Textual, Unknown)
//! - Number / NumericGrammar: parsed numeric form and the grammar that produces it
//! - Entry: the record stored for one key
//! - Error / Result: construction and configuration failures

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entry;
pub mod error;
pub mod kind;
pub mod number;

pub use entry::Entry;
pub use error::{Error, Result};
pub use kind::Kind;
pub use number::{Number, NumericGrammar};
