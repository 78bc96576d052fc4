//! Output formatting for CLI commands.

pub mod diagnostic;
pub mod table;

use std::fs::read_to_string;
use std::path::Path;

use glossa::{LoadWarning, PhraseTable};
use miette::{miette, Result};
use owo_colors::OwoColorize;

pub use diagnostic::GlossaDiagnostic;

/// Reads and compiles a document, turning located errors into diagnostics.
pub fn load_document(path: &Path) -> Result<(PhraseTable, Vec<LoadWarning>)> {
    let content = read_to_string(path)
        .map_err(|e| miette!("Failed to read document {}: {}", path.display(), e))?;

    PhraseTable::from_json_str(&content).map_err(|e| {
        match GlossaDiagnostic::from_load_error(path, &content, &e) {
            Some(diagnostic) => diagnostic.into(),
            None => miette!("{}: {}", path.display(), e),
        }
    })
}

/// Prints load warnings to stderr.
pub fn print_warnings(path: &Path, warnings: &[LoadWarning]) {
    for warning in warnings {
        eprintln!(
            "{}: {}: {}",
            "warning".yellow().bold(),
            path.display(),
            warning
        );
    }
}
