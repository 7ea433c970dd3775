//! Transformation spec parser.
//!
//! Parses the pipe segments of a placeholder (`name` or `name: args`) into
//! a small AST used by the pipe evaluator. Splitting the placeholder body
//! on `|` happens in the compute engine; this module only handles a single
//! segment.

mod error;
mod spec;

pub use error::ParseError;
pub use spec::{Arg, PipeSpec, parse_pipe_spec};
