//! Digging into a decoded commit list fixture.

use std::path::Path;

use keydig::{Dug, Key, dig, parse_keypath, resolve, source};
use serde_json::{Value, json};

fn sample_json() -> Value {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample.json");
    source::load_path(&path).expect("fixture must decode")
}

fn path(raw: &str) -> Vec<Key> {
    parse_keypath(raw).unwrap()
}

#[test]
fn test_complex_json_array() {
    let sample = sample_json();
    let dug = dig(&path(r#"[2, "commit", "author", "date"]"#), &sample, None);
    assert!(dug.found);
    assert_eq!(dug.value, json!("2024-08-21T23:17:54Z"));
}

#[test]
fn test_complex_json_array_key_not_found() {
    let sample = sample_json();
    let dug = dig(&path(r#"[2, "commit", "foo", "date"]"#), &sample, None);
    assert_eq!(dug, Dug { found: false, value: Value::Null });
}

#[test]
fn test_complex_json_array_key_not_found_default_value() {
    let sample = sample_json();
    let dug = dig(&path(r#"[2, "commit", "foo", "date"]"#), &sample, Some(json!(42)));
    assert!(!dug.found);
    assert_eq!(dug.value, json!(42));
}

#[test]
fn test_negative_index_into_records() {
    let sample = sample_json();
    let dug = dig(&path(r#"[-1, "commit", "message"]"#), &sample, None);
    assert_eq!(dug, Dug::found(json!("Initial commit")));
    let dug = dig(&path(r#"[-2, "commit", "author", "date"]"#), &sample, None);
    assert_eq!(dug, Dug::found(json!("2024-08-21T23:17:54Z")));
}

#[test]
fn test_explicit_null_in_fixture_is_found() {
    let sample = sample_json();
    let dug = dig(
        &path(r#"[0, "commit", "verification", "signature"]"#),
        &sample,
        Some(json!("unused")),
    );
    assert_eq!(dug, Dug::found(Value::Null));
}

#[test]
fn test_subtree_is_returned_whole() {
    let sample = sample_json();
    let dug = dig(&path(r#"[2, "commit", "author"]"#), &sample, None);
    assert!(dug.found);
    assert_eq!(dug.value["name"], "Priya Natarajan");
    assert_eq!(dug.value, sample[2]["commit"]["author"]);
}

#[test]
fn test_empty_parents_list_misses() {
    let sample = sample_json();
    let dug = dig(&path(r#"[-1, "parents", 0, "sha"]"#), &sample, None);
    assert!(!dug.found);
}

#[test]
fn test_scalar_midpath_misses() {
    let sample = sample_json();
    let dug = dig(&path(r#"[1, "sha", 0]"#), &sample, None);
    assert!(!dug.found);
    let dug = dig(&path(r#"[1, "commit", "comment_count", "x"]"#), &sample, None);
    assert!(!dug.found);
}

#[test]
fn test_index_out_of_range_on_records() {
    let sample = sample_json();
    assert!(!dig(&path(r#"[4, "sha"]"#), &sample, None).found);
    assert!(!dig(&path(r#"[-5, "sha"]"#), &sample, None).found);
    assert!(!dig(&path(r#"["0", "sha"]"#), &sample, None).found);
}

#[test]
fn test_resolve_matches_dig_across_paths() {
    let sample = sample_json();
    let cases = [
        r#"[0]"#,
        r#"[3, "author", "login"]"#,
        r#"[2, "commit", "tree", "sha"]"#,
        r#"[2, "commit", "tree", "nope"]"#,
        r#"[9]"#,
        r#"[]"#,
    ];
    for raw in cases {
        let keys = path(raw);
        let dug = dig(&keys, &sample, None);
        let borrowed = resolve(&keys, &sample);
        assert_eq!(dug.found, borrowed.is_some(), "disagreement on {raw}");
        if let Some(v) = borrowed {
            assert_eq!(&dug.value, v);
        }
    }
}

#[test]
fn test_source_not_mutated() {
    let sample = sample_json();
    let before = sample.clone();
    for _ in 0..3 {
        let _ = dig(&path(r#"[2, "commit", "author", "date"]"#), &sample, Some(json!(0)));
        let _ = dig(&path(r#"[2, "missing"]"#), &sample, Some(json!(0)));
    }
    assert_eq!(sample, before);
}

#[test]
fn test_reentrant_across_threads() {
    let sample = sample_json();
    let keys = path(r#"[2, "commit", "author", "date"]"#);
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let dug = dig(&keys, &sample, None);
                assert_eq!(dug.value, json!("2024-08-21T23:17:54Z"));
            });
        }
    });
}
