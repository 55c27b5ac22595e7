//! kindstore: an embeddable in-memory key-value store that classifies
//! every value it holds as numeric or textual.
//!
//! ```ignore
//! use kindstore::{Kind, NumericGrammar, Store, StoreOptions};
//!
//! let mut store = Store::open(StoreOptions::new().grammar(NumericGrammar::Float));
//! store.set("ratio", "3.5");
//! store.set("name", "world");
//!
//! assert_eq!(store.get("ratio"), Some("3.5"));
//! assert_eq!(store.get_kind("ratio"), Kind::Numeric);
//! assert_eq!(store.get_kind("name"), Kind::Textual);
//! assert_eq!(store.get_kind("missing"), Kind::Unknown);
//! ```
//!
//! The store is single-owner and unsynchronized. Values are never
//! persisted, expired or deleted; they live as long as the `Store`.

#![warn(missing_docs)]

pub mod types;

pub use kindstore_storage::Store;
pub use types::*;
