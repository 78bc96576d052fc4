//! Implementation of the `glossa check` command.

use std::path::PathBuf;

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::output::{load_document, print_warnings};

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Documents to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with non-zero code when any document has warnings
    #[arg(long)]
    pub strict: bool,
}

/// JSON output for one checked document.
#[derive(Debug, Serialize)]
struct CheckJson {
    file: String,
    locales: usize,
    phrases: usize,
    warnings: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs, verbose: bool) -> miette::Result<i32> {
    let mut reports = Vec::new();
    let mut any_warnings = false;

    for file in &args.files {
        let (table, warnings) = load_document(file)?;
        any_warnings |= !warnings.is_empty();

        if args.json {
            reports.push(CheckJson {
                file: file.display().to_string(),
                locales: table.locales().len(),
                phrases: table.phrase_keys().count(),
                warnings: warnings.iter().map(ToString::to_string).collect(),
            });
            continue;
        }

        print_warnings(file, &warnings);
        if verbose || warnings.is_empty() {
            println!(
                "{} {} ({} locales, {} phrases, {} warnings)",
                "ok".green().bold(),
                file.display(),
                table.locales().len(),
                table.phrase_keys().count(),
                warnings.len()
            );
        }
    }

    if args.json {
        let output = serde_json::to_string_pretty(&reports)
            .map_err(|e| miette::miette!("Failed to serialize report: {}", e))?;
        println!("{output}");
    }

    if args.strict && any_warnings {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
