//! Sample configuration data shared by the benchmarks

use confz::Store;
use serde_json::{json, Map, Value};

/// A wide, moderately deep document with `entries` records
pub fn sample_data(entries: usize) -> Value {
    let records: Vec<Value> = (0..entries)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("service-{}", i),
                "enabled": i % 2 == 0,
                "endpoints": {
                    "http": { "host": "localhost", "port": 8000 + i },
                    "metrics": { "path": "/metrics", "interval": 15 },
                },
                "tags": ["alpha", "beta", "gamma"],
            })
        })
        .collect();

    let by_name: Map<String, Value> = records
        .iter()
        .map(|record| (record["name"].as_str().unwrap_or_default().to_string(), record.clone()))
        .collect();

    json!({ "records": records, "by_name": by_name })
}

/// The store every store benchmark starts from
pub fn sample_store() -> Store {
    let mut store = Store::new();
    store.load_map(sample_document(1_000));
    store
}

/// Top-level document behind `sample_store`
pub fn sample_document(entries: usize) -> Map<String, Value> {
    let document = json!({
        "foo": { "bar": "baz" },
        "a": { "b": { "c": { "d": { "e": { "f": { "g": { "h": { "i": { "j": { "k": {
            "l": 1, "m": 2, "n": [1, 2]
        } } } } } } } } } } },
        "aaa": { "bbb": "ccc" },
        "sample": { "some": { "big": { "data": sample_data(entries) } } },
        "ddd": { "eee": { "fff": { "ggg": "test" } } },
    });

    match document {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
