//! Parse error type for pipe specs.

use thiserror::Error;

/// An error that occurred while parsing a transformation spec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with column information.
    #[error("syntax error at column {column}: {message}")]
    Syntax { column: usize, message: String },

    /// The spec was empty after trimming.
    #[error("empty pipe spec")]
    Empty,
}
