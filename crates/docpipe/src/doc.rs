//! Document-API data shapes.
//!
//! Thin serde declarations for the document model and replacement requests
//! exchanged with the document-editing API, plus construction of a
//! replace-text request from a computed placeholder. Walking the document
//! tree and talking to the API are out of scope.

use serde::{Deserialize, Serialize};

use crate::types::ContentPlaceholder;

/// A document: named headers plus a body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Doc {
    #[serde(default)]
    pub headers: std::collections::BTreeMap<String, Header>,
    #[serde(default)]
    pub body: Body,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuralElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<Paragraph>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub elements: Vec<ParagraphElement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_run: Option<TextRun>,
}

/// A run of text within a paragraph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    #[serde(default)]
    pub content: String,
}

/// One batch-update request; only text replacement is used here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_all_text: Option<ReplaceAllTextRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceAllTextRequest {
    pub replace_text: String,
    pub contains_text: SubstringMatchCriteria,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstringMatchCriteria {
    pub text: String,
    pub match_case: bool,
}

/// Build a literal-text replacement request from a computed placeholder.
///
/// The request replaces every case-sensitive occurrence of the raw
/// placeholder token with the rendered output text.
///
/// # Example
///
/// ```
/// use docpipe::{ComputeOptions, Placeholder, compute, doc};
/// use serde_json::json;
///
/// let data = json!({ "user": { "name": "ada" } });
/// let computed = compute(
///     &Placeholder::new("{{ user.name }}"),
///     &data,
///     &ComputeOptions::default(),
/// );
/// let request = doc::replace_request(&computed);
/// let replace = request.replace_all_text.unwrap();
/// assert_eq!(replace.replace_text, "ada");
/// assert_eq!(replace.contains_text.text, "{{ user.name }}");
/// ```
pub fn replace_request(computed: &ContentPlaceholder) -> Request {
    Request {
        replace_all_text: Some(ReplaceAllTextRequest {
            replace_text: computed.output_text(),
            contains_text: SubstringMatchCriteria {
                text: computed.placeholder.raw.clone(),
                match_case: true,
            },
        }),
    }
}
