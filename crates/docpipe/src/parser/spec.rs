//! Pipe spec parser using winnow.
//!
//! Parses one transformation segment of a placeholder into a name and
//! argument list. Handles:
//! - Bare formatter names: `upper`
//! - Argument lists: `truncate: 20`, `join: ', '`
//! - Quoted string literals, numeric literals, and data references
//!
//! Parsing is deterministic and side-effect-free; data references are not
//! resolved here, only classified.

use winnow::combinator::{alt, delimited, opt, preceded, separated};
use winnow::prelude::*;
use winnow::token::take_while;

use super::error::ParseError;

/// A parsed transformation spec: formatter name plus arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeSpec {
    pub name: String,
    pub args: Vec<Arg>,
}

/// One argument of a pipe spec.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// A literal value: quoted text or a numeric token.
    Literal(serde_json::Value),
    /// A bare token, resolved against the data object at application time.
    Reference(String),
}

/// Parse a transformation spec string.
///
/// Grammar: `name` or `name: arg1, arg2, ...`. Arguments are single-quoted
/// string literals, numeric literals, or bare dotted-path references.
///
/// # Errors
///
/// Returns [`ParseError`] when the spec is empty, the name is missing, an
/// argument is malformed, or trailing input remains.
pub fn parse_pipe_spec(input: &str) -> Result<PipeSpec, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut remaining = input;
    match pipe_spec(&mut remaining) {
        Ok(spec) => {
            if remaining.is_empty() {
                Ok(spec)
            } else {
                Err(ParseError::Syntax {
                    column: input.len() - remaining.len() + 1,
                    message: format!(
                        "unexpected character: '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                })
            }
        }
        Err(e) => Err(ParseError::Syntax {
            column: input.len() - remaining.len() + 1,
            message: format!("parse error: {e}"),
        }),
    }
}

/// Parse a complete spec: ws name ws (':' ws args)? ws
fn pipe_spec(input: &mut &str) -> ModalResult<PipeSpec> {
    let _ = ws(input)?;
    let name = identifier(input)?.to_string();
    let args: Option<Vec<Arg>> = opt(preceded(
        (ws, ':', ws),
        separated(1.., argument, (ws, ',', ws)),
    ))
    .parse_next(input)?;
    let _ = ws(input)?;

    Ok(PipeSpec {
        name,
        args: args.unwrap_or_default(),
    })
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

/// Parse a formatter name (alphanumeric with underscores).
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}

/// Parse one argument: quoted literal or bare token.
fn argument(input: &mut &str) -> ModalResult<Arg> {
    alt((quoted_literal, bare_token)).parse_next(input)
}

/// Parse a single-quoted string literal: 'text'
fn quoted_literal(input: &mut &str) -> ModalResult<Arg> {
    delimited('\'', take_while(0.., |c: char| c != '\''), '\'')
        .map(|s: &str| Arg::Literal(serde_json::Value::String(s.to_string())))
        .parse_next(input)
}

/// Parse a bare token and classify it as a numeric literal or a data
/// reference. Tokens are path-shaped: alphanumerics, `_`, `.`, `-`.
fn bare_token(input: &mut &str) -> ModalResult<Arg> {
    take_while(1.., |c: char| {
        c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-'
    })
    .map(classify_token)
    .parse_next(input)
}

/// Classify a bare token: i64, then f64, then data reference.
fn classify_token(token: &str) -> Arg {
    if let Ok(n) = token.parse::<i64>() {
        return Arg::Literal(serde_json::Value::from(n));
    }
    if let Ok(f) = token.parse::<f64>()
        && let Some(n) = serde_json::Number::from_f64(f)
    {
        return Arg::Literal(serde_json::Value::Number(n));
    }
    Arg::Reference(token.to_string())
}
