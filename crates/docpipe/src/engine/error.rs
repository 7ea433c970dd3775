//! Error types for the placeholder engine.
//!
//! Both kinds are recorded on the computed result rather than propagated:
//! `compute` never returns an error and never panics. The variants carry
//! enough context (offending segment plus the full expression) for callers
//! that surface failed placeholders to document authors.

use serde::Serialize;
use thiserror::Error;

/// An error resolving an input expression against the data object.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum LookupError {
    /// The expression was empty after trimming.
    #[error("empty expression")]
    EmptyExpression,

    /// The expression contained an empty segment (e.g. `a..b`).
    #[error("empty segment in expression '{expression}'")]
    EmptySegment { expression: String },

    /// A mapping did not contain the requested key.
    #[error("missing key '{key}' in expression '{expression}'")]
    MissingKey { key: String, expression: String },

    /// A sequence was indexed with a non-numeric segment.
    #[error("invalid index '{segment}' in expression '{expression}'")]
    BadIndex { segment: String, expression: String },

    /// A sequence index was past the end.
    #[error("index {index} out of bounds (len {len}) in expression '{expression}'")]
    IndexOutOfBounds {
        index: usize,
        len: usize,
        expression: String,
    },

    /// Traversal reached a scalar before the expression was exhausted.
    #[error("cannot traverse into {found} at '{segment}' in expression '{expression}'")]
    NotTraversable {
        segment: String,
        found: &'static str,
        expression: String,
    },
}

/// An error applying one transformation segment.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum FormatterError {
    /// The transformation spec did not parse.
    #[error("invalid pipe spec '{spec}': {message}")]
    InvalidSpec { spec: String, message: String },

    /// No formatter is registered under this name (or no registry was
    /// supplied at all).
    #[error("unknown formatter '{name}'")]
    Unknown { name: String },

    /// The formatter itself failed.
    #[error("formatter '{name}' failed: {message}")]
    Invocation { name: String, message: String },
}
