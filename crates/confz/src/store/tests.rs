//! Unit tests for the configuration store

use super::*;
use confz_core::MAX_SEGMENTS;
use proptest::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn create_test_store() -> Store {
    let mut store = Store::new();
    store
        .load(json!({
            "foo": { "bar": "baz" },
            "aaa": { "bbb": "ccc" },
            "ddd": { "eee": { "fff": { "ggg": "test" } } },
        }))
        .unwrap();
    store
}

fn temp_file(dir: &TempDir, name: &str, content: &str) -> Utf8PathBuf {
    let path = Utf8PathBuf::try_from(dir.path().join(name)).unwrap();
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_from_object() {
    let store = create_test_store();

    assert_eq!(store.get("foo").unwrap(), Some(json!({ "bar": "baz" })));
    assert_eq!(store.get("aaa").unwrap(), Some(json!({ "bbb": "ccc" })));
    assert_eq!(store.get("ddd:eee:fff").unwrap(), Some(json!({ "ggg": "test" })));
    assert_eq!(store.get("ddd:eee:fff:ggg").unwrap(), Some(json!("test")));
    assert_eq!(store.len(), 3);
    assert_eq!(store.sources(), &[ConfigSource::Object]);
}

#[test]
fn test_load_replaces_existing_keys() {
    let mut store = create_test_store();
    store.load(json!({ "foo": 1, "new": true })).unwrap();

    assert_eq!(store.get("foo").unwrap(), Some(json!(1)));
    assert_eq!(store.get("new").unwrap(), Some(json!(true)));
    assert_eq!(store.get("aaa:bbb").unwrap(), Some(json!("ccc")));
}

#[test]
fn test_load_non_object_source() {
    let mut store = create_test_store();
    store.load(json!([1, 2, 3])).unwrap();
    assert_eq!(store.len(), 3);

    let mut strict = Store::with_policy(ErrorPolicy::Strict);
    let err = strict.load(json!("config.json")).unwrap_err();
    assert!(matches!(err, ConfzError::InvalidSource { .. }));
    assert!(strict.is_empty());
    assert!(strict.sources().is_empty());
}

#[test]
fn test_set_and_get_first_level_keys() {
    let mut store = Store::new();
    store.set("foo", json!("bar")).unwrap();
    store.set("baz", json!("qux")).unwrap();

    assert_eq!(store.get("foo").unwrap(), Some(json!("bar")));
    assert_eq!(store.get("baz").unwrap(), Some(json!("qux")));

    store.set("baz", json!("vegas")).unwrap();
    assert_eq!(store.get("foo").unwrap(), Some(json!("bar")));
    assert_eq!(store.get("baz").unwrap(), Some(json!("vegas")));
}

#[test]
fn test_empty_key_is_ignored() {
    let mut store = Store::new();
    store.set("", json!({ "foo": "bar" })).unwrap();
    store.extend("", json!({ "foo": "bar" })).unwrap();

    assert_eq!(store.get("").unwrap(), None);
    assert!(store.is_empty());
    assert!(!store.contains(""));
}

#[test]
fn test_empty_key_is_rejected_when_strict() {
    let mut store = Store::with_policy(ErrorPolicy::Strict);

    assert!(matches!(store.set("", json!(1)), Err(ConfzError::InvalidKey { .. })));
    assert!(matches!(store.get(""), Err(ConfzError::InvalidKey { .. })));
    assert!(matches!(
        store.extend("", json!({})),
        Err(ConfzError::InvalidKey { .. })
    ));
    assert!(store.is_empty());
}

#[test]
fn test_overly_deep_key_is_ignored() {
    let key = vec!["k"; 10_000].join(":");

    let mut store = Store::new();
    store.set(&key, json!(1)).unwrap();
    store.extend(&key, json!({ "foo": "bar" })).unwrap();

    assert_eq!(store.get(&key).unwrap(), None);
    assert!(store.is_empty());
}

#[test]
fn test_overly_deep_key_is_rejected_when_strict() {
    let key = vec!["k"; 10_000].join(":");
    let mut store = Store::with_policy(ErrorPolicy::Strict);

    assert!(matches!(store.set(&key, json!(1)), Err(ConfzError::InvalidKey { .. })));
    assert!(matches!(store.get(&key), Err(ConfzError::InvalidKey { .. })));
    assert!(store.is_empty());

    let deepest = vec!["k"; MAX_SEGMENTS].join(":");
    store.set(&deepest, json!("bottom")).unwrap();
    assert_eq!(store.get(&deepest).unwrap(), Some(json!("bottom")));
}

#[test]
fn test_missing_keys_are_absent() {
    let mut store = Store::new();
    assert_eq!(store.get("foo").unwrap(), None);
    assert_eq!(store.get("foo:bar").unwrap(), None);

    store
        .load(json!({ "foo": { "bar": "baz" }, "empty": {} }))
        .unwrap();
    assert_eq!(store.get("a").unwrap(), None);
    assert_eq!(store.get("a:b:c:d:e:f").unwrap(), None);
    assert_eq!(store.get("foo:bar:baz").unwrap(), None);

    // an empty object is a real value, distinct from absence
    assert_eq!(store.get("empty").unwrap(), Some(json!({})));
}

#[test]
fn test_set_and_get_nested_keys() {
    let mut store = Store::new();
    store.set("foo:bar", json!("baz")).unwrap();

    assert_eq!(store.get("foo").unwrap(), Some(json!({ "bar": "baz" })));
    assert_eq!(store.get("foo:bar").unwrap(), Some(json!("baz")));
}

#[test]
fn test_set_and_get_deeply_nested_keys() {
    let mut store = Store::new();
    store.set("foo:bar:baz:qux:quux", json!("test")).unwrap();

    assert_eq!(
        store.get("foo").unwrap(),
        Some(json!({ "bar": { "baz": { "qux": { "quux": "test" } } } }))
    );
    assert_eq!(
        store.get("foo:bar:baz").unwrap(),
        Some(json!({ "qux": { "quux": "test" } }))
    );
    assert_eq!(store.get("foo:bar:baz:qux:quux").unwrap(), Some(json!("test")));

    store.set("a:b:c:d", json!("v")).unwrap();
    assert_eq!(store.get("a:b:c").unwrap(), Some(json!({ "d": "v" })));
}

#[test]
fn test_set_on_partially_existing_paths() {
    let mut store = create_test_store();

    store.set("aaa:c:d:e:f", json!("vegas")).unwrap();
    assert_eq!(
        store.get("aaa").unwrap(),
        Some(json!({ "bbb": "ccc", "c": { "d": { "e": { "f": "vegas" } } } }))
    );

    store.set("foo:x", json!("y")).unwrap();
    assert_eq!(store.get("foo").unwrap(), Some(json!({ "bar": "baz", "x": "y" })));
}

#[test]
fn test_nested_set_is_non_destructive() {
    let mut store = Store::new();
    store.set("a:b", json!(1)).unwrap();
    store.set("a:c", json!(2)).unwrap();

    assert_eq!(store.get("a").unwrap(), Some(json!({ "b": 1, "c": 2 })));
}

#[test]
fn test_reassign_keys() {
    let mut store = Store::new();
    store.set("aaa", json!("ccc")).unwrap();
    store.set("aaa", json!("ddd")).unwrap();
    assert_eq!(store.get("aaa").unwrap(), Some(json!("ddd")));

    store.set("xxx:bbb:ccc", json!("ddd")).unwrap();
    assert_eq!(store.get("xxx:bbb:ccc").unwrap(), Some(json!("ddd")));
    store.set("xxx:bbb:ccc", json!("eee")).unwrap();
    assert_eq!(store.get("xxx:bbb:ccc").unwrap(), Some(json!("eee")));
}

#[test]
fn test_set_nested_preserves_existing_config() {
    let mut store = create_test_store();
    store.set("ddd:eee:fff", json!("vegas")).unwrap();

    assert_eq!(store.get("ddd:eee").unwrap(), Some(json!({ "fff": "vegas" })));
    assert_eq!(store.get("ddd:eee:fff").unwrap(), Some(json!("vegas")));
    assert_eq!(store.get("foo:bar").unwrap(), Some(json!("baz")));
    assert_eq!(store.get("aaa").unwrap(), Some(json!({ "bbb": "ccc" })));
}

#[test]
fn test_set_below_a_scalar_replaces_it() {
    let mut store = create_test_store();
    store.set("foo:bar:c", json!(1)).unwrap();
    assert_eq!(store.get("foo").unwrap(), Some(json!({ "bar": { "c": 1 } })));

    store.set("top", json!("scalar")).unwrap();
    store.set("top:child", json!(true)).unwrap();
    assert_eq!(store.get("top").unwrap(), Some(json!({ "child": true })));
}

#[test]
fn test_get_does_not_expose_first_level_values() {
    let store = create_test_store();

    let mut config = store.get("ddd").unwrap().unwrap();
    config["eee"]["fff"] = json!("vegas");

    assert_eq!(config["eee"]["fff"], json!("vegas"));
    assert_eq!(store.get("ddd:eee:fff").unwrap(), Some(json!({ "ggg": "test" })));
}

#[test]
fn test_get_does_not_expose_nested_values() {
    let store = create_test_store();

    let mut config = store.get("ddd:eee").unwrap().unwrap();
    config["fff"] = json!("vegas");

    assert_eq!(config["fff"], json!("vegas"));
    assert_eq!(store.get("ddd:eee:fff").unwrap(), Some(json!({ "ggg": "test" })));
}

#[test]
fn test_set_value_is_owned_by_store() {
    // `set` moves the value in; a copy kept by the caller is independent
    let mut store = Store::new();
    let mut value = json!({ "a": 1 });
    store.set("top", value.clone()).unwrap();
    store.set("nested:key", value.clone()).unwrap();

    value["a"] = json!(2);
    assert_eq!(store.get("top:a").unwrap(), Some(json!(1)));
    assert_eq!(store.get("nested:key:a").unwrap(), Some(json!(1)));
}

#[test]
fn test_extend_existing_config() {
    let mut store = create_test_store();
    store.load(json!({ "ccc": { "xxx": [] } })).unwrap();

    store.extend("foo", json!({ "qux": true })).unwrap();
    assert_eq!(store.get("foo").unwrap(), Some(json!({ "qux": true, "bar": "baz" })));

    store.extend("aaa", json!({ "bbb": "hollywood" })).unwrap();
    assert_eq!(store.get("aaa").unwrap(), Some(json!({ "bbb": "hollywood" })));

    store
        .extend("ddd:eee", json!({ "quux": false, "fff": { "baaz": "vegas" } }))
        .unwrap();
    assert_eq!(
        store.get("ddd").unwrap(),
        Some(json!({ "eee": { "quux": false, "fff": { "baaz": "vegas", "ggg": "test" } } }))
    );

    store.extend("ccc", json!({ "xxx": ["ciao"] })).unwrap();
    assert_eq!(store.get("ccc").unwrap(), Some(json!({ "xxx": ["ciao"] })));
}

#[test]
fn test_extend_does_not_splice_arrays() {
    let mut store = create_test_store();
    store.set("aaa:bbb", json!([1, 2, 3])).unwrap();

    store.extend("aaa", json!({ "bbb": [4, 5, 6] })).unwrap();
    assert_eq!(store.get("aaa").unwrap(), Some(json!({ "bbb": [4, 5, 6] })));
}

#[test]
fn test_extend_does_not_merge_strings() {
    let mut store = create_test_store();

    store.extend("aaa", json!({ "bbb": "zzz" })).unwrap();
    assert_eq!(store.get("aaa").unwrap(), Some(json!({ "bbb": "zzz" })));
}

#[test]
fn test_extend_with_non_object_arguments() {
    let mut store = create_test_store();
    store.set("foo:bar", json!([1, 2, 3])).unwrap();

    store.extend("aaa", json!("zzz")).unwrap();
    assert_eq!(store.get("aaa").unwrap(), Some(json!({ "bbb": "ccc" })));

    store.extend("foo:bar", json!([4, 5, 6])).unwrap();
    assert_eq!(store.get("foo").unwrap(), Some(json!({ "bar": [1, 2, 3] })));

    store.extend("missing", json!(42)).unwrap();
    assert!(!store.contains("missing"));
}

#[test]
fn test_extend_scalar_with_object_keeps_scalar() {
    let mut store = create_test_store();

    store.extend("foo:bar", json!({ "x": 1 })).unwrap();
    assert_eq!(store.get("foo:bar").unwrap(), Some(json!("baz")));
}

#[test]
fn test_extend_missing_or_null_key() {
    let mut store = Store::new();
    store.extend("fresh:nested", json!({ "a": 1 })).unwrap();
    assert_eq!(store.get("fresh").unwrap(), Some(json!({ "nested": { "a": 1 } })));

    store.set("nil", Value::Null).unwrap();
    store.extend("nil", json!({ "b": 2 })).unwrap();
    assert_eq!(store.get("nil").unwrap(), Some(json!({ "b": 2 })));
}

#[test]
fn test_layer_merges_documents() {
    let mut store = create_test_store();
    let overlay = json!({
        "ddd": { "eee": { "fff": { "hhh": "layered" } } },
        "aaa": "replaced",
        "new": { "key": 1 },
    });
    store.layer(overlay.as_object().unwrap().clone());

    assert_eq!(
        store.get("ddd:eee:fff").unwrap(),
        Some(json!({ "ggg": "test", "hhh": "layered" }))
    );
    assert_eq!(store.get("aaa").unwrap(), Some(json!("replaced")));
    assert_eq!(store.get("new:key").unwrap(), Some(json!(1)));
    assert_eq!(store.get("foo:bar").unwrap(), Some(json!("baz")));
    assert_eq!(store.sources().len(), 2);
}

#[test]
fn test_contains_and_keys() {
    let store = create_test_store();

    assert!(store.contains("foo"));
    assert!(store.contains("ddd:eee:fff:ggg"));
    assert!(!store.contains("ddd:eee:zzz"));

    let mut keys: Vec<&str> = store.keys().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["aaa", "ddd", "foo"]);
}

#[test]
fn test_snapshot_is_a_copy() {
    let mut store = create_test_store();
    let mut snapshot = store.snapshot();
    snapshot["foo"]["bar"] = json!("changed");

    assert_eq!(store.get("foo:bar").unwrap(), Some(json!("baz")));

    store.set("foo:bar", json!("later")).unwrap();
    assert_eq!(snapshot["foo"]["bar"], json!("changed"));
}

#[tokio::test]
async fn test_load_file() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "config.json", r#"{ "server": { "port": 8080 }, "debug": true }"#);

    let mut store = Store::new();
    store.load_file(&path).await.unwrap();

    assert_eq!(store.get("server:port").unwrap(), Some(json!(8080)));
    assert_eq!(store.get("debug").unwrap(), Some(json!(true)));
    assert_eq!(store.sources(), &[ConfigSource::File(path)]);
}

#[tokio::test]
async fn test_load_file_failures_leave_store_unchanged() {
    let dir = TempDir::new().unwrap();
    let broken = temp_file(&dir, "broken.json", "{ \"server\": ");
    let missing = Utf8PathBuf::try_from(dir.path().join("missing.json")).unwrap();

    let mut store = create_test_store();
    store.load_file(&broken).await.unwrap();
    store.load_file(&missing).await.unwrap();

    assert_eq!(store.len(), 3);
    assert_eq!(store.sources(), &[ConfigSource::Object]);
}

#[tokio::test]
async fn test_load_file_failures_when_strict() {
    let dir = TempDir::new().unwrap();
    let broken = temp_file(&dir, "broken.json", "not json at all");
    let missing = Utf8PathBuf::try_from(dir.path().join("missing.json")).unwrap();

    let mut store = Store::with_policy(ErrorPolicy::Strict);
    let err = store.load_file(&broken).await.unwrap_err();
    assert!(matches!(err, ConfzError::SourceParse { .. }));

    let err = store.load_file(&missing).await.unwrap_err();
    assert!(matches!(err, ConfzError::SourceRead { .. }));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_layer_file() {
    let dir = TempDir::new().unwrap();
    let base = temp_file(&dir, "base.json", r#"{ "server": { "host": "localhost", "port": 80 } }"#);
    let local = temp_file(&dir, "local.json", r#"{ "server": { "port": 8080 } }"#);

    let mut store = Store::new();
    store.load_file(&base).await.unwrap();
    store.layer_file(&local).await.unwrap();

    assert_eq!(
        store.get("server").unwrap(),
        Some(json!({ "host": "localhost", "port": 8080 }))
    );
    assert_eq!(
        store.sources(),
        &[ConfigSource::File(base), ConfigSource::File(local)]
    );
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z ]{0,8}".prop_map(Value::from),
        prop::collection::vec(any::<u8>().prop_map(Value::from), 0..4).prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn set_then_get_returns_value(
        segments in prop::collection::vec("[a-z]{1,3}", 1..5),
        value in arb_leaf(),
    ) {
        let key = segments.join(":");
        let mut store = create_test_store();
        store.set(&key, value.clone()).unwrap();

        prop_assert_eq!(store.get(&key).unwrap(), Some(value));
    }

    #[test]
    fn load_then_get_returns_each_key(
        entries in prop::collection::btree_map("[a-z]{1,4}", arb_leaf(), 1..6),
    ) {
        let source: Map<String, Value> = entries.clone().into_iter().collect();
        let mut store = Store::new();
        store.load_map(source);

        for (key, value) in entries {
            prop_assert_eq!(store.get(&key).unwrap(), Some(value));
        }
    }
}
