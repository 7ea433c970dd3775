//! Placeholder evaluation engine.
//!
//! This module provides the evaluation pipeline that resolves placeholder
//! input expressions against nested data and threads the result through
//! formatter pipes, containing failures per step.

mod compute;
mod error;
mod formatters;
pub mod pipes;
mod resolver;

pub use compute::{ComputeOptions, compute};
pub use error::{FormatterError, LookupError};
pub use formatters::{BoxError, Formatter, FormatterRegistry};
pub use resolver::resolve;
