//! Dotted-path resolution over nested data.

use serde_json::Value;

use crate::engine::LookupError;

/// Resolve a dotted-path expression against a nested data value.
///
/// Segments address mapping keys by name and sequence positions by numeric
/// index, so `user.emails.0` reads the first element of a list under
/// `user.emails`. An explicit `null` in the data resolves successfully;
/// only an absent key, a bad index, or traversal into a scalar fails.
///
/// Pure lookup: no caching, never mutates `data`, safe to call repeatedly
/// and concurrently.
///
/// # Errors
///
/// Returns a [`LookupError`] naming the offending segment when any part of
/// the expression cannot be followed.
pub fn resolve(expression: &str, data: &Value) -> Result<Value, LookupError> {
    if expression.is_empty() {
        return Err(LookupError::EmptyExpression);
    }

    let mut current = data;
    for segment in expression.split('.') {
        if segment.is_empty() {
            return Err(LookupError::EmptySegment {
                expression: expression.to_string(),
            });
        }
        current = step(current, segment, expression)?;
    }
    Ok(current.clone())
}

/// Follow one segment into a value.
fn step<'a>(
    current: &'a Value,
    segment: &str,
    expression: &str,
) -> Result<&'a Value, LookupError> {
    match current {
        Value::Object(map) => map.get(segment).ok_or_else(|| LookupError::MissingKey {
            key: segment.to_string(),
            expression: expression.to_string(),
        }),
        Value::Array(items) => {
            let index: usize = segment.parse().map_err(|_| LookupError::BadIndex {
                segment: segment.to_string(),
                expression: expression.to_string(),
            })?;
            items.get(index).ok_or_else(|| LookupError::IndexOutOfBounds {
                index,
                len: items.len(),
                expression: expression.to_string(),
            })
        }
        scalar => Err(LookupError::NotTraversable {
            segment: segment.to_string(),
            found: kind_name(scalar),
            expression: expression.to_string(),
        }),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
