pub mod doc;
pub mod engine;
pub mod parser;
pub mod types;

pub use engine::{
    BoxError, ComputeOptions, Formatter, FormatterError, FormatterRegistry, LookupError, compute,
    resolve,
};
pub use types::{ContentPlaceholder, InputBinding, PipeRecord, Placeholder, PlaceholderKind, Span};

/// Creates a [`FormatterRegistry`] from name-formatter pairs.
///
/// Formatters are anything implementing [`Formatter`], so plain functions
/// and closures over `(&Value, &[Value])` register directly.
///
/// # Example
///
/// ```
/// use docpipe::{BoxError, formatters};
/// use serde_json::Value;
///
/// fn upper(value: &Value, _args: &[Value]) -> Result<Value, BoxError> {
///     Ok(Value::String(value.as_str().unwrap_or_default().to_uppercase()))
/// }
///
/// let registry = formatters! { "upper" => upper };
/// assert!(registry.contains("upper"));
/// ```
#[macro_export]
macro_rules! formatters {
    {} => {
        $crate::FormatterRegistry::new()
    };
    { $($name:expr => $formatter:expr),+ $(,)? } => {
        {
            let mut registry = $crate::FormatterRegistry::new();
            $(
                registry.register($name, $formatter);
            )+
            registry
        }
    };
}
