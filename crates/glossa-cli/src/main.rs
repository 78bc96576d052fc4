//! `glossa`: inspect phrase content documents from the command line.
//!
//! `check` lints documents, `coverage` tabulates which locales carry which
//! phrases and `render` resolves one phrase through the same store and
//! renderers an application would use.

mod commands;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_check, run_coverage, run_render, CheckArgs, CoverageArgs, RenderArgs};
use miette::{MietteHandlerOpts, Result};

#[derive(Debug, Parser)]
#[command(name = "glossa", version, about = "Phrase content document tools")]
struct Cli {
    /// When to color output
    #[arg(long, value_enum, env = "GLOSSA_COLOR", default_value_t = ColorWhen::Auto, global = true)]
    color: ColorWhen,

    /// Print warnings and fallback details that are hidden by default
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorWhen {
    /// Follow the terminal, `NO_COLOR` and `FORCE_COLOR`
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    fn apply(self) {
        match self {
            ColorWhen::Auto => {}
            ColorWhen::Always => owo_colors::set_override(true),
            ColorWhen::Never => owo_colors::set_override(false),
        }
    }

    /// Whether miette may use color in its reports.
    fn diagnostics_colored(self) -> Option<bool> {
        match self {
            ColorWhen::Auto => None,
            ColorWhen::Always => Some(true),
            ColorWhen::Never => Some(false),
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load documents and report lint warnings
    Check(CheckArgs),
    /// Tabulate direct, fallback and unresolved phrases per locale
    Coverage(CoverageArgs),
    /// Resolve one phrase and print its rich markup or plain text
    Render(RenderArgs),
}

impl Command {
    /// Runs the command and returns its process exit code.
    fn run(self, verbose: bool) -> Result<i32> {
        match self {
            Command::Check(args) => run_check(args, verbose),
            Command::Coverage(args) => run_coverage(args),
            Command::Render(args) => run_render(args, verbose),
        }
    }
}

/// Installs the miette report handler used for document diagnostics.
fn install_report_hook(color: ColorWhen) -> Result<()> {
    miette::set_hook(Box::new(move |_| {
        let mut opts = MietteHandlerOpts::new().unicode(true).context_lines(2);
        if let Some(colored) = color.diagnostics_colored() {
            opts = opts.color(colored);
        }
        Box::new(opts.build())
    }))?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    cli.color.apply();
    if let Err(report) = install_report_hook(cli.color) {
        eprintln!("{report:?}");
    }

    let code = cli.command.run(cli.verbose).unwrap_or_else(|report| {
        eprintln!("{report:?}");
        exitcode::SOFTWARE
    });
    exit(code);
}
