//! Integration tests for pipe application and the formatter registry.

use docpipe::engine::pipes;
use docpipe::{
    BoxError, ComputeOptions, Formatter, FormatterError, FormatterRegistry, formatters,
};
use serde_json::{Value, json};

fn upper(value: &Value, _args: &[Value]) -> Result<Value, BoxError> {
    Ok(Value::String(
        value.as_str().unwrap_or_default().to_uppercase(),
    ))
}

fn echo_args(_value: &Value, args: &[Value]) -> Result<Value, BoxError> {
    Ok(Value::Array(args.to_vec()))
}

fn explode(_value: &Value, _args: &[Value]) -> Result<Value, BoxError> {
    Err("boom".into())
}

// =============================================================================
// Registry
// =============================================================================

#[test]
fn test_register_and_lookup() {
    let mut registry = FormatterRegistry::new();
    assert!(!registry.contains("upper"));
    registry.register("upper", upper);
    assert!(registry.contains("upper"));
    assert!(registry.get("upper").is_some());
    assert!(registry.get("lower").is_none());
}

#[test]
fn test_register_replaces_previous_entry() {
    let mut registry = FormatterRegistry::new();
    registry.register("f", upper);
    registry.register("f", explode);
    let formatter = registry.get("f").unwrap();
    assert!(formatter.apply(&json!("x"), &[]).is_err());
}

#[test]
fn test_formatters_macro() {
    let registry = formatters! { "upper" => upper, "explode" => explode };
    assert!(registry.contains("upper"));
    assert!(registry.contains("explode"));
    let empty = formatters! {};
    assert!(!empty.contains("upper"));
}

#[test]
fn test_closures_register_directly() {
    let mut registry = FormatterRegistry::new();
    registry.register("first", |value: &Value, _args: &[Value]| {
        Ok(value.as_array().and_then(|a| a.first()).cloned().unwrap_or(Value::Null))
    });
    let result = registry.get("first").unwrap().apply(&json!([1, 2]), &[]);
    assert_eq!(result.unwrap(), json!(1));
}

// =============================================================================
// Pipe Application
// =============================================================================

#[test]
fn test_apply_invokes_formatter() {
    let registry = formatters! { "upper" => upper };
    let options = ComputeOptions::builder().formatters(&registry).build();
    let output = pipes::apply(&json!("ada"), "upper", &json!({}), &options).unwrap();
    assert_eq!(output, json!("ADA"));
}

#[test]
fn test_unknown_formatter() {
    let registry = formatters! {};
    let options = ComputeOptions::builder().formatters(&registry).build();
    let error = pipes::apply(&json!(5), "upper", &json!({}), &options).unwrap_err();
    assert_eq!(
        error,
        FormatterError::Unknown {
            name: "upper".to_string(),
        }
    );
}

#[test]
fn test_absent_registry_is_unknown() {
    let error =
        pipes::apply(&json!(5), "upper", &json!({}), &ComputeOptions::default()).unwrap_err();
    assert!(matches!(error, FormatterError::Unknown { name } if name == "upper"));
}

#[test]
fn test_malformed_spec() {
    let registry = formatters! { "upper" => upper };
    let options = ComputeOptions::builder().formatters(&registry).build();
    let error = pipes::apply(&json!(5), "upper!!", &json!({}), &options).unwrap_err();
    assert!(matches!(error, FormatterError::InvalidSpec { .. }));
}

#[test]
fn test_formatter_failure_is_wrapped() {
    let registry = formatters! { "explode" => explode };
    let options = ComputeOptions::builder().formatters(&registry).build();
    let error = pipes::apply(&json!(5), "explode", &json!({}), &options).unwrap_err();
    assert_eq!(
        error,
        FormatterError::Invocation {
            name: "explode".to_string(),
            message: "boom".to_string(),
        }
    );
}

// =============================================================================
// Argument Resolution
// =============================================================================

#[test]
fn test_literal_arguments_pass_through() {
    let registry = formatters! { "echo" => echo_args };
    let options = ComputeOptions::builder().formatters(&registry).build();
    let output = pipes::apply(&json!(null), "echo: 20, 'tail'", &json!({}), &options).unwrap();
    assert_eq!(output, json!([20, "tail"]));
}

#[test]
fn test_reference_argument_resolves_against_data() {
    let registry = formatters! { "echo" => echo_args };
    let options = ComputeOptions::builder().formatters(&registry).build();
    let data = json!({ "user": { "name": "ada" } });
    let output = pipes::apply(&json!(null), "echo: user.name", &data, &options).unwrap();
    assert_eq!(output, json!(["ada"]));
}

#[test]
fn test_unresolvable_reference_falls_back_to_literal_text() {
    let registry = formatters! { "echo" => echo_args };
    let options = ComputeOptions::builder().formatters(&registry).build();
    let output = pipes::apply(&json!(null), "echo: n-a", &json!({}), &options).unwrap();
    assert_eq!(output, json!(["n-a"]));
}
