//! Storage layer for kindstore
//!
//! - Store: single-owner map from key to classified [`Entry`]
//! - StoreObserver: injected diagnostics hook, no-op by default
//!
//! [`Entry`]: kindstore_core::Entry

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod observer;
pub mod store;

#[cfg(test)]
mod test_util;

pub use observer::{NoopObserver, StoreObserver, TracingObserver};
pub use store::Store;
