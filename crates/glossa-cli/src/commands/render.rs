//! Implementation of the `glossa render` command.

use std::path::PathBuf;

use glossa::render::rich::{self, markup};
use glossa::render::plain;
use glossa::{DebugFlag, LocaleStore, RenderContext, Value, Variables};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::output::{load_document, print_warnings};

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// Content document (.json)
    pub document: PathBuf,

    /// Phrase key to resolve
    #[arg(long, required = true)]
    pub key: String,

    /// Locale to resolve in. Defaults to the document's global default.
    #[arg(long, env = "GLOSSA_LOCALE")]
    pub locale: Option<String>,

    /// Variables in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Print plain text instead of rich markup
    #[arg(long)]
    pub plain: bool,

    /// Wrap rich output in the debug overlay
    #[arg(long, conflicts_with = "plain")]
    pub debug: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for render results.
#[derive(Serialize)]
pub struct RenderResult {
    pub key: String,
    pub locale: String,
    pub output: String,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{s}': expected name=value"))?;
    Ok((name.to_string(), value.to_string()))
}

/// Integers and floats become numbers, everything else text.
fn parse_value(raw: String) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        Value::from(n)
    } else if let Ok(f) = raw.parse::<f64>() {
        Value::from(f)
    } else {
        Value::from(raw)
    }
}

/// Run the render command.
pub fn run_render(args: RenderArgs, verbose: bool) -> miette::Result<i32> {
    let (table, warnings) = load_document(&args.document)?;
    if verbose {
        print_warnings(&args.document, &warnings);
    }

    if let Some(code) = &args.locale {
        if !table.has_locale(code) {
            eprintln!(
                "{}: locale '{}' is not declared, using '{}'",
                "warning".yellow().bold(),
                code,
                table.global_default().locale_code
            );
        }
    }

    let store = LocaleStore::builder()
        .table(table)
        .maybe_preferred_locale(args.locale.clone())
        .build();

    let variables: Variables = args
        .params
        .into_iter()
        .map(|(name, raw)| (name, parse_value(raw)))
        .collect();

    let resolved = match store.resolve(&args.key, &variables) {
        Ok(resolved) => resolved,
        Err(e) => {
            if args.json {
                let output = serde_json::json!({ "error": e.to_string() });
                eprintln!("{output:#}");
            } else {
                eprintln!("{}: {}", "error".red().bold(), e);
            }
            return Ok(exitcode::DATAERR);
        }
    };

    let output = if args.plain {
        plain::render_resolved(&resolved, &plain::renderers())
    } else {
        let context = RenderContext::builder().debug(DebugFlag::new(args.debug)).build();
        markup(&rich::render_resolved(&resolved, &rich::renderers(), &context))
    };

    if args.json {
        let result = RenderResult {
            key: args.key,
            locale: resolved.locale_code,
            output,
        };
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| miette::miette!("Failed to serialize result: {}", e))?;
        println!("{json}");
    } else {
        if verbose && resolved.locale_code != store.selected_locale_code() {
            eprintln!("resolved from fallback locale '{}'", resolved.locale_code);
        }
        println!("{output}");
    }

    Ok(exitcode::OK)
}
