//! Pipe evaluator: applies one named transformation to a value.

use serde_json::Value;

use crate::engine::FormatterError;
use crate::engine::compute::ComputeOptions;
use crate::engine::resolver::resolve;
use crate::parser::{Arg, parse_pipe_spec};

/// Apply a single transformation spec to a value.
///
/// Parses the spec, looks the formatter up in `options.formatters`,
/// resolves any data-referencing arguments against `data`, and invokes the
/// formatter with `(value, args)`.
///
/// A reference argument that does not resolve falls back to its literal
/// token text, so `default: n-a` works without requiring an `n-a` key in
/// the data.
///
/// # Errors
///
/// Fails when the spec is malformed, the formatter name is not registered
/// (an absent registry is a failure, not a no-op), or the formatter itself
/// returns an error.
pub fn apply(
    value: &Value,
    spec: &str,
    data: &Value,
    options: &ComputeOptions<'_>,
) -> Result<Value, FormatterError> {
    let parsed = parse_pipe_spec(spec).map_err(|e| FormatterError::InvalidSpec {
        spec: spec.to_string(),
        message: e.to_string(),
    })?;

    let formatter = options
        .formatters
        .and_then(|registry| registry.get(&parsed.name))
        .ok_or_else(|| FormatterError::Unknown {
            name: parsed.name.clone(),
        })?;

    let args: Vec<Value> = parsed
        .args
        .iter()
        .map(|arg| match arg {
            Arg::Literal(v) => v.clone(),
            Arg::Reference(path) => {
                resolve(path, data).unwrap_or_else(|_| Value::String(path.clone()))
            }
        })
        .collect();

    formatter
        .apply(value, &args)
        .map_err(|e| FormatterError::Invocation {
            name: parsed.name.clone(),
            message: e.to_string(),
        })
}
