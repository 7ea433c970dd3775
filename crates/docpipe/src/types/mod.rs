mod computed;
mod placeholder;

pub use computed::{ContentPlaceholder, InputBinding, PipeRecord, PlaceholderKind};
pub use placeholder::{Placeholder, Span};
