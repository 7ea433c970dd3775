//! Placeholder compute engine.
//!
//! This module provides the core evaluation logic that turns a raw
//! placeholder plus a data object into a computed substitution:
//! - Strips the `{{ }}` delimiters and splits the body on `|`
//! - Resolves the first segment against the data via the path resolver
//! - Threads the value through each pipe segment, leftmost first
//! - Contains every failure inside the result record

use bon::Builder;
use serde_json::Value;

use crate::engine::formatters::FormatterRegistry;
use crate::engine::pipes;
use crate::engine::resolver::resolve;
use crate::types::{ContentPlaceholder, InputBinding, Placeholder, PipeRecord, PlaceholderKind};

/// Options for placeholder evaluation.
///
/// # Example
///
/// ```
/// use docpipe::{ComputeOptions, FormatterRegistry};
/// use serde_json::json;
///
/// let registry = FormatterRegistry::new();
/// let options = ComputeOptions::builder()
///     .formatters(&registry)
///     .fallback(json!("n/a"))
///     .build();
/// assert!(options.formatters.is_some());
/// ```
#[derive(Debug, Default, Builder)]
pub struct ComputeOptions<'a> {
    /// Formatter table consulted by pipe segments. Pipes fail with an
    /// unknown-formatter error when this is absent.
    pub formatters: Option<&'a FormatterRegistry>,

    /// Value substituted when input resolution fails. When set, the lookup
    /// error is suppressed rather than recorded on the result.
    pub fallback: Option<Value>,
}

/// Evaluate a placeholder against a data object.
///
/// This is the core evaluation function. The placeholder body (between the
/// 2-character delimiters) is split on `|`: the first segment is resolved
/// as a dotted path into `data`, and each remaining segment is applied as
/// a transformation to the previous step's output, left to right.
///
/// Every failure is captured on the result instead of surfacing to the
/// caller: a failed input resolution yields `""` (or the configured
/// fallback), and a failed pipe passes its input value through unchanged
/// while later pipes continue from that value. The function never panics,
/// even on placeholders shorter than the delimiters themselves.
///
/// Pure function of its inputs; independent placeholders can be evaluated
/// concurrently against shared `data` and formatters.
pub fn compute(
    placeholder: &Placeholder,
    data: &Value,
    options: &ComputeOptions<'_>,
) -> ContentPlaceholder {
    let body = strip_delimiters(&placeholder.raw);

    let mut segments = body.split('|').map(str::trim);
    let input_raw = segments.next().unwrap_or("");

    let input = evaluate_input(input_raw, data, options);

    let mut pipes = Vec::new();
    let mut transformed = input.value.clone();
    for transformation in segments {
        let record = transform_value(&transformed, transformation, data, options);
        transformed = record.output.clone();
        pipes.push(record);
    }

    let output = match pipes.last() {
        Some(last) => last.output.clone(),
        None => input.value.clone(),
    };

    ContentPlaceholder {
        placeholder: placeholder.clone(),
        kind: PlaceholderKind::Content,
        input,
        pipes,
        output,
    }
}

/// Strip exactly the leading and trailing 2-character delimiters and trim.
///
/// Degrades to an empty body (a contained lookup error downstream) when the
/// raw text is shorter than two delimiter pairs or the cut would split a
/// multi-byte character.
fn strip_delimiters(raw: &str) -> &str {
    if raw.len() < 4 {
        return "";
    }
    raw.get(2..raw.len() - 2).unwrap_or("").trim()
}

/// Resolve the input expression, applying the fallback policy on failure.
///
/// With no fallback configured the error is recorded and the value is the
/// empty string. With a fallback (even an empty one) the fallback becomes
/// the value and the error is suppressed; downstream consumers rely on
/// fallback substitutions reading as successes.
fn evaluate_input(raw: &str, data: &Value, options: &ComputeOptions<'_>) -> InputBinding {
    match resolve(raw, data) {
        Ok(value) => InputBinding {
            raw: raw.to_string(),
            value,
            error: None,
        },
        Err(error) => match &options.fallback {
            None => InputBinding {
                raw: raw.to_string(),
                value: Value::String(String::new()),
                error: Some(error),
            },
            Some(fallback) => InputBinding {
                raw: raw.to_string(),
                value: fallback.clone(),
                error: None,
            },
        },
    }
}

/// Apply one transformation, containing any failure in the record.
fn transform_value(
    value: &Value,
    transformation: &str,
    data: &Value,
    options: &ComputeOptions<'_>,
) -> PipeRecord {
    match pipes::apply(value, transformation, data, options) {
        Ok(output) => PipeRecord {
            raw: transformation.to_string(),
            output,
            error: None,
        },
        Err(error) => PipeRecord {
            raw: transformation.to_string(),
            output: value.clone(),
            error: Some(error),
        },
    }
}
