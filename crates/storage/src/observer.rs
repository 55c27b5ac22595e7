//! Diagnostics hook for store operations
//!
//! A store reports what it does to a [`StoreObserver`]. Observers are purely
//! informational: they see borrowed keys and kinds, cannot touch the map,
//! and nothing they do changes an operation's result.
//!
//! Two implementations ship with the crate:
//! - [`NoopObserver`]: the default, emits nothing
//! - [`TracingObserver`]: forwards every call as a `tracing` event

use kindstore_core::{Kind, NumericGrammar};

/// Target used for every event emitted by [`TracingObserver`]
pub const TRACE_TARGET: &str = "kindstore::store";

/// Receives a callback for each store operation
///
/// All methods default to doing nothing, so an implementation only
/// overrides what it cares about.
pub trait StoreObserver: Send + Sync {
    /// A store was created with the given grammar.
    fn on_open(&self, _grammar: NumericGrammar) {}

    /// `key` was written and classified as `kind`.
    fn on_set(&self, _key: &str, _kind: Kind) {}

    /// `key` was read; `found` is false for absent keys.
    fn on_get(&self, _key: &str, _found: bool) {}

    /// The kind of `key` was read (`Unknown` for absent keys).
    fn on_get_kind(&self, _key: &str, _kind: Kind) {}
}

/// Observer that ignores every call
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StoreObserver for NoopObserver {}

/// Observer that emits `tracing` events
///
/// Open is logged at `info`, individual operations at `debug`. Where the
/// events go is decided by whatever subscriber the host process installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl StoreObserver for TracingObserver {
    fn on_open(&self, grammar: NumericGrammar) {
        tracing::info!(target: TRACE_TARGET, ?grammar, "store opened");
    }

    fn on_set(&self, key: &str, kind: Kind) {
        tracing::debug!(target: TRACE_TARGET, key, %kind, "set");
    }

    fn on_get(&self, key: &str, found: bool) {
        tracing::debug!(target: TRACE_TARGET, key, found, "get");
    }

    fn on_get_kind(&self, key: &str, kind: Kind) {
        tracing::debug!(target: TRACE_TARGET, key, %kind, "get_kind");
    }
}
