use serde::{Deserialize, Serialize};

/// A located occurrence of templating syntax in document content.
///
/// Placeholders are produced by an upstream extraction step that scans
/// document text for `{{ ... }}` tokens. The engine only interprets `raw`;
/// location metadata is carried through to the computed result unchanged.
///
/// # Example
///
/// ```
/// use docpipe::Placeholder;
///
/// let p = Placeholder::new("{{ user.name }}");
/// assert_eq!(p.raw, "{{ user.name }}");
/// assert!(p.span.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    /// The exact matched substring, including the `{{` and `}}` delimiters.
    pub raw: String,

    /// Byte range of the match within the source text, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

/// Byte range of a placeholder within its source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Placeholder {
    /// Create a placeholder from its raw matched text, with no location.
    pub fn new(raw: impl Into<String>) -> Placeholder {
        Placeholder {
            raw: raw.into(),
            span: None,
        }
    }

    /// Create a placeholder with a byte span in the source text.
    pub fn with_span(raw: impl Into<String>, start: usize, end: usize) -> Placeholder {
        Placeholder {
            raw: raw.into(),
            span: Some(Span { start, end }),
        }
    }
}
