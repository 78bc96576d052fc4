//! Coverage command implementation.

use std::path::PathBuf;

use clap::Args;
use glossa::{fallback_chain, PhraseTable};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::output::load_document;
use crate::output::table::{format_coverage_table, LocaleCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Content document (.json).
    pub document: PathBuf,

    /// Locales to report (comma-separated). Defaults to every declared locale.
    #[arg(long, value_delimiter = ',')]
    pub locale: Vec<String>,

    /// Exit with non-zero code if any phrase cannot be resolved in a reported locale.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    locale: String,
    translated: usize,
    via_fallback: usize,
    total: usize,
    missing: Vec<String>,
    unresolved: Vec<String>,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let (table, _warnings) = load_document(&args.document)?;
    let keys: Vec<&str> = table.phrase_keys().collect();
    let total = keys.len();

    let codes = if args.locale.is_empty() {
        table.locale_codes()
    } else {
        args.locale.clone()
    };

    let mut coverage_data = Vec::new();
    let mut unresolved_data = Vec::new();
    for code in &codes {
        let (coverage, unresolved) = locale_coverage(&table, code, &keys);
        coverage_data.push(coverage);
        unresolved_data.push(unresolved);
    }

    let any_unresolved = unresolved_data.iter().any(|u| !u.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .zip(&unresolved_data)
            .map(|(c, unresolved)| CoverageJson {
                locale: c.locale_code.clone(),
                translated: c.translated,
                via_fallback: c.via_fallback,
                total,
                missing: c.missing.clone(),
                unresolved: unresolved.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{json_output}");
    } else {
        println!("{}", format_coverage_table(total, &coverage_data));

        for (locale_coverage, unresolved) in coverage_data.iter().zip(&unresolved_data) {
            if !locale_coverage.missing.is_empty() {
                println!("\nMissing in {}:", locale_coverage.locale_code);
                for key in &locale_coverage.missing {
                    let note = if unresolved.contains(key) { " (unresolved)" } else { "" };
                    println!("  - {key}{note}");
                }
            }
        }
    }

    if args.strict && any_unresolved {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Coverage of one locale plus the keys no locale in its chain provides.
fn locale_coverage(table: &PhraseTable, code: &str, keys: &[&str]) -> (LocaleCoverage, Vec<String>) {
    let chain = fallback_chain(table, code);
    let mut translated = 0;
    let mut via_fallback = 0;
    let mut missing = Vec::new();
    let mut unresolved = Vec::new();

    for key in keys {
        if table.entry(key, code).is_some() {
            translated += 1;
            continue;
        }
        missing.push((*key).to_string());
        if chain.iter().any(|link| table.entry(key, link).is_some()) {
            via_fallback += 1;
        } else {
            unresolved.push((*key).to_string());
        }
    }

    let coverage = LocaleCoverage {
        locale_code: code.to_string(),
        is_global_default: table.global_default().locale_code == code,
        translated,
        via_fallback,
        missing,
    };
    (coverage, unresolved)
}
