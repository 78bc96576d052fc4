//! Error and warning types for loading and resolving phrases.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

/// Errors that make a content document unusable.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a document.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not match the document shape.
    #[error("invalid document at {line}:{column}: {message}")]
    Json {
        line: usize,
        column: usize,
        message: String,
    },

    /// A content template failed to parse.
    #[error("phrase '{phrase_key}' ({locale_code}): template error at {line}:{column}: {message}")]
    Template {
        phrase_key: String,
        locale_code: String,
        line: usize,
        column: usize,
        message: String,
    },

    /// No locale is marked as the global default.
    #[error("locale table has no global default locale")]
    NoGlobalDefault,

    /// More than one locale is marked as the global default.
    #[error("locale table has multiple global defaults: {}", codes.join(", "))]
    MultipleGlobalDefaults { codes: Vec<String> },

    /// The same locale code appears twice.
    #[error("duplicate locale code '{code}'")]
    DuplicateLocale { code: String },

    /// Attempted to reload a store that was not loaded from a file.
    #[error("cannot reload: store was not loaded from a file")]
    NoPathForReload,
}

/// Non-fatal problems found while loading or validating a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A node with an unrecognized `type` was dropped.
    UnknownNodeKind {
        phrase_key: String,
        locale_code: String,
    },

    /// A list contained a non-`li` child, which was wrapped in an item.
    NonItemInList {
        phrase_key: String,
        locale_code: String,
    },

    /// An entry exists for a locale code the table does not declare.
    UnknownEntryLocale {
        phrase_key: String,
        locale_code: String,
    },

    /// A locale falls back to a code the table does not declare.
    UnknownFallback {
        locale_code: String,
        fallback_code: String,
    },

    /// A phrase has no entry in the global-default locale.
    MissingInGlobalDefault {
        phrase_key: String,
        global_default: String,
    },

    /// A phrase has no debug-info entry.
    MissingDebugInfo { phrase_key: String },
}

impl Display for LoadWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            LoadWarning::UnknownNodeKind {
                phrase_key,
                locale_code,
            } => write!(
                f,
                "phrase '{phrase_key}' ({locale_code}): dropped node of unknown type"
            ),
            LoadWarning::NonItemInList {
                phrase_key,
                locale_code,
            } => write!(
                f,
                "phrase '{phrase_key}' ({locale_code}): list child is not 'li', wrapped in an item"
            ),
            LoadWarning::UnknownEntryLocale {
                phrase_key,
                locale_code,
            } => write!(
                f,
                "phrase '{phrase_key}': entry for undeclared locale '{locale_code}' skipped"
            ),
            LoadWarning::UnknownFallback {
                locale_code,
                fallback_code,
            } => write!(
                f,
                "locale '{locale_code}' falls back to undeclared locale '{fallback_code}'"
            ),
            LoadWarning::MissingInGlobalDefault {
                phrase_key,
                global_default,
            } => write!(
                f,
                "phrase '{phrase_key}' has no entry in global default locale '{global_default}'"
            ),
            LoadWarning::MissingDebugInfo { phrase_key } => {
                write!(f, "phrase '{phrase_key}' has no debug info")
            }
        }
    }
}

/// An error that occurred while resolving a phrase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No locale in the fallback chain has an entry for the key.
    #[error("missing phrase key '{key}' (tried: {}){}", tried.join(" -> "), format_suggestions(suggestions))]
    MissingPhraseKey {
        key: String,
        tried: Vec<String>,
        suggestions: Vec<String>,
    },

    /// The entry interpolates a variable the caller did not bind.
    #[error("phrase '{key}' requires variable '${name}'")]
    MissingVariable { key: String, name: String },

    /// A fragment was bound to a variable used inside an `href`.
    #[error("phrase '{key}': variable '${name}' is a fragment and cannot be used in a link target")]
    FragmentInAttribute { key: String, name: String },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}", suggestions.join(", "))
    }
}

/// Compute "did you mean" suggestions for a misspelled key.
///
/// Returns up to three candidates sorted by edit distance. Short keys allow a
/// distance of one, longer keys a distance of two.
pub fn compute_suggestions(target: &str, available: &[String]) -> Vec<String> {
    let max_distance = if target.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (levenshtein(target, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
