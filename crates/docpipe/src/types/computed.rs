use serde::Serialize;
use serde_json::Value;

use crate::engine::{FormatterError, LookupError};

use super::Placeholder;

/// Result-kind tag on a computed placeholder.
///
/// Distinguishes content substitutions from other placeholder kinds handled
/// elsewhere in the merge pipeline (serialized under the `type` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderKind {
    Content,
}

/// The resolved input expression of a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputBinding {
    /// The input expression text, e.g. `user.name`.
    pub raw: String,

    /// The resolved value, the configured fallback, or `""` on failure.
    pub value: Value,

    /// Set when resolution failed and no fallback was configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<LookupError>,
}

/// One applied transformation segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipeRecord {
    /// The transformation spec text, e.g. `truncate: 20`.
    pub raw: String,

    /// The step's output. On failure this equals the step's input unchanged.
    pub output: Value,

    /// Set when the formatter was unknown, the spec was malformed, or the
    /// formatter itself failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FormatterError>,
}

/// The computed result for one placeholder.
///
/// Carries the original placeholder fields plus the resolved input, one
/// record per pipe segment in application order, and the final output value.
/// Results are constructed fresh per evaluation and owned exclusively by the
/// caller; the engine keeps no reference to them.
///
/// # Example
///
/// ```
/// use docpipe::{ComputeOptions, Placeholder, compute};
/// use serde_json::json;
///
/// let data = json!({ "user": { "name": "ada" } });
/// let result = compute(
///     &Placeholder::new("{{ user.name }}"),
///     &data,
///     &ComputeOptions::default(),
/// );
/// assert_eq!(result.output, json!("ada"));
/// assert!(result.is_fully_resolved());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentPlaceholder {
    #[serde(flatten)]
    pub placeholder: Placeholder,

    #[serde(rename = "type")]
    pub kind: PlaceholderKind,

    pub input: InputBinding,

    /// One record per transformation segment, leftmost first. Failed steps
    /// still produce a record; nothing is ever dropped from this sequence.
    pub pipes: Vec<PipeRecord>,

    /// Equals `input.value` when no pipes were applied, otherwise the last
    /// pipe's `output`.
    pub output: Value,
}

impl ContentPlaceholder {
    /// True when neither input resolution nor any pipe recorded an error.
    ///
    /// Note that a configured fallback suppresses the input error, so a
    /// fallback substitution counts as fully resolved.
    pub fn is_fully_resolved(&self) -> bool {
        self.input.error.is_none() && self.pipes.iter().all(|p| p.error.is_none())
    }

    /// Render the final output as the text a document substitution inserts.
    ///
    /// Strings are used verbatim, numbers and booleans via their display
    /// form, `null` renders empty, and composite values render as compact
    /// JSON.
    pub fn output_text(&self) -> String {
        render_text(&self.output)
    }
}

/// Render a value as substitution text.
fn render_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        composite => composite.to_string(),
    }
}
