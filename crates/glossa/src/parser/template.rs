//! Content template parser using winnow.
//!
//! Handles:
//! - Literal text segments
//! - Variable interpolation: `{$name}`, whitespace inside the braces allowed
//! - Escape sequences: `{{` and `}}`

use winnow::combinator::{alt, delimited, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{none_of, take_while};

use super::ast::{Segment, Template};
use super::error::ParseError;

/// Parse a template string into an AST.
pub fn parse_template(input: &str) -> Result<Template, ParseError> {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(t) => {
            if remaining.is_empty() {
                Ok(t)
            } else {
                let (line, column) = calculate_position(input, remaining);
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!(
                        "unexpected character: '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            Err(ParseError::Syntax {
                line,
                column,
                message: format!("parse error: {e}"),
            })
        }
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other @ Segment::Variable(_) => result.push(other),
        }
    }
    result
}

fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((escape_sequence, interpolation, literal_char)).parse_next(input)
}

fn escape_sequence(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "{{".value(Segment::Literal("{".to_string())),
        "}}".value(Segment::Literal("}".to_string())),
    ))
    .parse_next(input)
}

fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    none_of(['{', '}'])
        .map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

/// `{ $name }`
fn interpolation(input: &mut &str) -> ModalResult<Segment> {
    delimited(('{', ws), preceded('$', identifier), (ws, '}'))
        .map(|name: &str| Segment::Variable(name.to_string()))
        .parse_next(input)
}

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}
