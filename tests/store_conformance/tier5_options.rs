//! Tier 5: options and construction

use kindstore::{Error, Kind, NoopObserver, NumericGrammar, Store, StoreOptions};

#[test]
fn default_store_uses_integer_grammar() {
    assert_eq!(Store::new().grammar(), NumericGrammar::Integer);
    assert_eq!(Store::default().grammar(), NumericGrammar::Integer);
}

#[test]
fn options_from_json_select_grammar() {
    let opts = StoreOptions::from_json(r#"{"grammar": "float", "trace_operations": true}"#)
        .unwrap();
    let mut store = Store::open(opts);
    assert_eq!(store.grammar(), NumericGrammar::Float);

    store.set("x", "0.5");
    assert_eq!(store.get_kind("x"), Kind::Numeric);
}

#[test]
fn malformed_options_are_rejected() {
    let err = StoreOptions::from_json("{grammar: float}").unwrap_err();
    assert!(matches!(err, Error::InvalidOptions(_)));
}

#[test]
fn failed_observer_factory_aborts_construction() {
    let result = Store::try_with_observer(StoreOptions::default(), || {
        Err::<NoopObserver, _>(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "log sink missing",
        ))
    });

    let err = result.unwrap_err();
    assert!(matches!(err, Error::Initialization { .. }));
    assert!(err.to_string().contains("log sink missing"));
}

#[test]
fn stores_are_isolated() {
    let mut a = Store::new();
    let b = Store::new();

    a.set("shared", "1");
    assert_eq!(a.get("shared"), Some("1"));
    assert_eq!(b.get("shared"), None);
}
