//! Miette diagnostic wrapper for document load errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use glossa::LoadError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing into a content document.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(glossa::document))]
pub struct GlossaDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: SourceSpan,

    label: String,

    message: String,

    #[help]
    help: Option<String>,
}

impl GlossaDiagnostic {
    /// Builds a diagnostic for errors that have a location in `content`.
    ///
    /// Returns `None` for errors without one, such as I/O failures or an
    /// inconsistent locale table.
    pub fn from_load_error(path: &Path, content: &str, err: &LoadError) -> Option<Self> {
        let (span, label, message, help): (SourceSpan, String, String, Option<String>) = match err {
            LoadError::Json {
                line,
                column,
                message,
            } => (
                char_span(content, offset_of(content, *line, *column)),
                "here".to_string(),
                format!("invalid document: {message}"),
                None,
            ),
            LoadError::Template {
                phrase_key,
                locale_code,
                line,
                column,
                message,
            } => (
                phrase_span(content, phrase_key),
                format!("in this phrase's {locale_code} entry"),
                format!("template error: {message}"),
                Some(format!(
                    "the error is at {line}:{column} of the template text; \
                     interpolations are written {{$name}} and literal braces as {{{{ and }}}}"
                )),
            ),
            _ => return None,
        };

        Some(GlossaDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span,
            label,
            message,
            help,
        })
    }
}

/// Byte offset of a 1-based line and column, clamped to the content.
///
/// Lines are counted from raw `\n` bytes so `\r\n` documents land on the
/// same byte serde_json reported.
fn offset_of(content: &str, line: usize, column: usize) -> usize {
    let line_start = if line <= 1 {
        0
    } else {
        content
            .match_indices('\n')
            .nth(line - 2)
            .map_or(content.len(), |(index, _)| index + 1)
    };
    let offset = (line_start + column.saturating_sub(1)).min(content.len());
    floor_char_boundary(content, offset)
}

/// Span covering the whole character at `offset`.
fn char_span(content: &str, offset: usize) -> SourceSpan {
    let len = content[offset..].chars().next().map_or(0, char::len_utf8);
    (offset, len).into()
}

fn floor_char_boundary(content: &str, mut offset: usize) -> usize {
    while !content.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Span of the phrase's key inside the `phrases` object, or of the whole
/// document start when it cannot be found.
fn phrase_span(content: &str, phrase_key: &str) -> SourceSpan {
    let quoted = format!("\"{phrase_key}\"");
    let phrases_start = content.find("\"phrases\"").unwrap_or(0);
    match content[phrases_start..].find(&quoted) {
        Some(found) => (phrases_start + found, quoted.len()).into(),
        None => (0, 1).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_counts_previous_lines() {
        let content = "ab\ncde\nf";
        assert_eq!(offset_of(content, 2, 2), 4);
        assert_eq!(offset_of(content, 9, 9), content.len());
    }

    #[test]
    fn offset_counts_carriage_returns() {
        let content = "{\r\n  \"a\": 1,\r\n  x\r\n}";
        assert_eq!(&content[offset_of(content, 3, 3)..][..1], "x");
    }

    #[test]
    fn offset_never_splits_a_character() {
        let content = "é";
        assert_eq!(offset_of(content, 1, 2), 0);
        assert_eq!(char_span(content, 0).len(), 2);
    }

    #[test]
    fn phrase_span_skips_debug_info_keys() {
        let content = r#"{"debugInfo": {"a": {}}, "phrases": {"a": {}}}"#;
        let span = phrase_span(content, "a");
        assert_eq!(span.offset(), content.rfind("\"a\"").unwrap());
        assert_eq!(span.len(), 3);
    }
}
