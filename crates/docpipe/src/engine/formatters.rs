//! Formatter registry for value transformations.
//!
//! Formatters are caller-supplied functions applied by pipe segments
//! (e.g. `upper`, `truncate: 20`). This module provides the registry and
//! the transform contract; the crate ships no built-in formatters.

use std::collections::HashMap;

use serde_json::Value;

/// Error type formatters may return; wrapped into
/// [`FormatterError::Invocation`](crate::engine::FormatterError::Invocation)
/// by the pipe evaluator.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A named value transformation.
///
/// Receives the current pipeline value and the arguments parsed from the
/// pipe spec, and produces the transformed value. Implemented for any
/// matching `Fn` closure, so plain functions and closures register directly.
pub trait Formatter: Send + Sync {
    fn apply(&self, value: &Value, args: &[Value]) -> Result<Value, BoxError>;
}

impl<F> Formatter for F
where
    F: Fn(&Value, &[Value]) -> Result<Value, BoxError> + Send + Sync,
{
    fn apply(&self, value: &Value, args: &[Value]) -> Result<Value, BoxError> {
        self(value, args)
    }
}

/// Registry mapping formatter names to transformations.
///
/// Callers register implementations before evaluation begins; the engine
/// only looks up by name and never mutates the registry.
#[derive(Default)]
pub struct FormatterRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a formatter under a name, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, formatter: impl Formatter + 'static) {
        self.formatters.insert(name.into(), Box::new(formatter));
    }

    /// Get a formatter by name.
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(AsRef::as_ref)
    }

    /// Check whether a formatter is registered under this name.
    pub fn contains(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }
}

impl std::fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatterRegistry")
            .field("len", &self.formatters.len())
            .finish()
    }
}
