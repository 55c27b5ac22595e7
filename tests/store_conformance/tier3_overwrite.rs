//! Tier 3: overwrite and idempotence

use crate::test_utils::all_stores;
use kindstore::Kind;

#[test]
fn overwrite_numeric_with_text() {
    for mut store in all_stores() {
        store.set("k", "2");
        store.set("k", "abc");

        assert_eq!(store.get("k"), Some("abc"));
        assert_eq!(store.get_kind("k"), Kind::Textual);
        assert!(store.get_number("k").is_none());
    }
}

#[test]
fn overwrite_text_with_numeric() {
    for mut store in all_stores() {
        store.set("k", "abc");
        store.set("k", "2");

        assert_eq!(store.get("k"), Some("2"));
        assert_eq!(store.get_kind("k"), Kind::Numeric);
    }
}

#[test]
fn repeated_set_is_idempotent() {
    for mut store in all_stores() {
        store.set("counter", "7");
        let first = (store.get("counter").map(str::to_owned), store.get_kind("counter"));

        store.set("counter", "7");
        store.set("counter", "7");
        let later = (store.get("counter").map(str::to_owned), store.get_kind("counter"));

        assert_eq!(first, later);
        assert_eq!(store.len(), 1);
    }
}

#[test]
fn reads_do_not_mutate() {
    for mut store in all_stores() {
        store.get("ghost");
        store.get_kind("ghost");
        assert!(store.is_empty());
        assert!(!store.contains("ghost"));

        store.set("k", "v");
        store.get("k");
        store.get_kind("k");
        assert_eq!(store.len(), 1);
    }
}
