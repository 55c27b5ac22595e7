//! Classifying key-value store
//!
//! Maps string keys to [`Entry`] records. Every write classifies its value
//! as `Numeric` or `Textual` under the store's [`NumericGrammar`]; reads
//! return the raw text or the kind.
//!
//! # Design
//!
//! - FxHashMap: O(1) lookups, fast non-crypto hash
//! - Exclusive ownership: `set` takes `&mut self`, reads take `&self`
//! - No delete: an entry is only ever created or replaced whole
//!
//! # Thread Safety
//!
//! None internally. The store is `Send + Sync`, so a caller that needs
//! shared mutation wraps it in a lock of its choosing.

use crate::observer::{NoopObserver, StoreObserver, TracingObserver};
use kindstore_config::StoreOptions;
use kindstore_core::{Entry, Error, Kind, Number, NumericGrammar, Result};
use rustc_hash::FxHashMap;
use std::fmt;

/// In-memory store of classified string values
///
/// # Example
///
/// ```ignore
/// use kindstore_storage::Store;
/// use kindstore_core::Kind;
///
/// let mut store = Store::new();
/// store.set("int", "2");
/// assert_eq!(store.get("int"), Some("2"));
/// assert_eq!(store.get_kind("int"), Kind::Numeric);
/// assert_eq!(store.get_kind("nil"), Kind::Unknown);
/// ```
pub struct Store {
    entries: FxHashMap<String, Entry>,
    grammar: NumericGrammar,
    observer: Box<dyn StoreObserver>,
}

impl Store {
    /// Create an empty store with default options
    pub fn new() -> Self {
        Self::open(StoreOptions::default())
    }

    /// Create an empty store from options
    ///
    /// Uses [`TracingObserver`] when `trace_operations` is set and
    /// [`NoopObserver`] otherwise. Never fails.
    pub fn open(options: StoreOptions) -> Self {
        if options.trace_operations {
            Self::with_observer(options, TracingObserver)
        } else {
            Self::with_observer(options, NoopObserver)
        }
    }

    /// Create an empty store reporting to `observer`
    pub fn with_observer(options: StoreOptions, observer: impl StoreObserver + 'static) -> Self {
        let store = Self {
            entries: FxHashMap::with_capacity_and_hasher(
                options.initial_capacity,
                Default::default(),
            ),
            grammar: options.grammar,
            observer: Box::new(observer),
        };
        store.observer.on_open(store.grammar);
        store
    }

    /// Create an empty store whose observer is built by a fallible factory
    ///
    /// # Arguments
    ///
    /// * `options` - Store options; `trace_operations` is ignored
    /// * `factory` - Builds the observer, e.g. by connecting a log sink
    ///
    /// # Errors
    ///
    /// Returns `Error::Initialization` carrying the factory's error message.
    /// The factory is called exactly once.
    pub fn try_with_observer<F, O, E>(options: StoreOptions, factory: F) -> Result<Self>
    where
        F: FnOnce() -> std::result::Result<O, E>,
        O: StoreObserver + 'static,
        E: fmt::Display,
    {
        let observer = factory().map_err(Error::initialization)?;
        Ok(Self::with_observer(options, observer))
    }

    /// Write `value` under `key`
    ///
    /// The value is stored verbatim and classified under the store's
    /// grammar. Any previous entry for `key` is replaced entirely.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let entry = Entry::classify(value, self.grammar);
        self.observer.on_set(&key, entry.kind());
        self.entries.insert(key, entry);
    }

    /// Raw text stored under `key`, `None` if the key was never set
    pub fn get(&self, key: &str) -> Option<&str> {
        let entry = self.entries.get(key);
        self.observer.on_get(key, entry.is_some());
        entry.map(|e| e.raw())
    }

    /// Kind of the value under `key`, `Kind::Unknown` if the key was never set
    pub fn get_kind(&self, key: &str) -> Kind {
        let kind = self
            .entries
            .get(key)
            .map(Entry::kind)
            .unwrap_or(Kind::Unknown);
        self.observer.on_get_kind(key, kind);
        kind
    }

    /// Full record stored under `key`
    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Parsed number under `key`
    ///
    /// `None` when the key is absent or its value is textual.
    pub fn get_number(&self, key: &str) -> Option<Number> {
        self.entries.get(key).and_then(Entry::number)
    }

    /// Check if a key has been set
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no key has been set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Grammar used to classify values
    pub fn grammar(&self) -> NumericGrammar {
        self.grammar
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("grammar", &self.grammar)
            .field("entries", &self.len())
            .finish()
    }
}
