//! Integration tests for dotted-path resolution.

use docpipe::{LookupError, resolve};
use serde_json::json;

// =============================================================================
// Successful Lookups
// =============================================================================

#[test]
fn test_top_level_key() {
    let data = json!({ "name": "ada" });
    assert_eq!(resolve("name", &data).unwrap(), json!("ada"));
}

#[test]
fn test_nested_keys() {
    let data = json!({ "a": { "b": { "c": 42 } } });
    assert_eq!(resolve("a.b.c", &data).unwrap(), json!(42));
}

#[test]
fn test_sequence_index() {
    let data = json!({ "items": ["first", "second"] });
    assert_eq!(resolve("items.0", &data).unwrap(), json!("first"));
    assert_eq!(resolve("items.1", &data).unwrap(), json!("second"));
}

#[test]
fn test_index_then_key() {
    let data = json!({ "users": [{ "name": "ada" }, { "name": "grace" }] });
    assert_eq!(resolve("users.1.name", &data).unwrap(), json!("grace"));
}

#[test]
fn test_numeric_mapping_key() {
    let data = json!({ "rows": { "0": "zero" } });
    assert_eq!(resolve("rows.0", &data).unwrap(), json!("zero"));
}

#[test]
fn test_explicit_null_resolves() {
    let data = json!({ "middle_name": null });
    assert_eq!(resolve("middle_name", &data).unwrap(), json!(null));
}

#[test]
fn test_composite_value_resolves() {
    let data = json!({ "user": { "name": "ada" } });
    assert_eq!(resolve("user", &data).unwrap(), json!({ "name": "ada" }));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_missing_key() {
    let data = json!({ "user": {} });
    assert_eq!(
        resolve("user.missing", &data).unwrap_err(),
        LookupError::MissingKey {
            key: "missing".to_string(),
            expression: "user.missing".to_string(),
        }
    );
}

#[test]
fn test_missing_intermediate_key() {
    let data = json!({});
    assert!(matches!(
        resolve("a.b.c", &data).unwrap_err(),
        LookupError::MissingKey { key, .. } if key == "a"
    ));
}

#[test]
fn test_index_out_of_bounds() {
    let data = json!({ "items": ["only"] });
    assert_eq!(
        resolve("items.3", &data).unwrap_err(),
        LookupError::IndexOutOfBounds {
            index: 3,
            len: 1,
            expression: "items.3".to_string(),
        }
    );
}

#[test]
fn test_non_numeric_index_into_sequence() {
    let data = json!({ "items": ["only"] });
    assert!(matches!(
        resolve("items.first", &data).unwrap_err(),
        LookupError::BadIndex { segment, .. } if segment == "first"
    ));
}

#[test]
fn test_traversal_into_scalar() {
    let data = json!({ "count": 3 });
    assert_eq!(
        resolve("count.value", &data).unwrap_err(),
        LookupError::NotTraversable {
            segment: "value".to_string(),
            found: "number",
            expression: "count.value".to_string(),
        }
    );
}

#[test]
fn test_traversal_into_null() {
    let data = json!({ "user": null });
    assert!(matches!(
        resolve("user.name", &data).unwrap_err(),
        LookupError::NotTraversable { found: "null", .. }
    ));
}

#[test]
fn test_empty_expression() {
    let data = json!({});
    assert_eq!(resolve("", &data).unwrap_err(), LookupError::EmptyExpression);
}

#[test]
fn test_empty_segment() {
    let data = json!({ "a": { "b": 1 } });
    assert!(matches!(
        resolve("a..b", &data).unwrap_err(),
        LookupError::EmptySegment { .. }
    ));
}

#[test]
fn test_data_not_mutated() {
    let data = json!({ "a": [1, 2, 3] });
    let before = data.clone();
    let _ = resolve("a.1", &data);
    let _ = resolve("a.9", &data);
    assert_eq!(data, before);
}
