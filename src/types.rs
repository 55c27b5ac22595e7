//! Public types for the kindstore API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Public API types - these are what users should use
// ============================================================================

// Classification
pub use kindstore_core::Kind;
pub use kindstore_core::Number;
pub use kindstore_core::NumericGrammar;

// Stored record
pub use kindstore_core::Entry;

// Errors
pub use kindstore_core::Error;
pub use kindstore_core::Result;

// Configuration
pub use kindstore_config::StoreOptions;

// Diagnostics hook
pub use kindstore_storage::{NoopObserver, StoreObserver, TracingObserver};
