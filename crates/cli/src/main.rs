//! CLI tool for renumbering slides in an HTML presentation.

use anyhow::{Context, Result};
use clap::Parser;
use slidefix_core::{renumber_document, FixOutcome};
use std::fs;
use std::path::PathBuf;

/// The presentation file used when no path is given on the command line.
const DEFAULT_PRESENTATION_FILE: &str = "presentation.html";

/// Fix slide numbering after inserting a slide marked with data-slide="x".
#[derive(Parser, Debug)]
#[command(name = "slidefix")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Presentation HTML file to fix
    #[arg(default_value = DEFAULT_PRESENTATION_FILE)]
    file: PathBuf,

    /// Report what would change without writing the file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Print the renumbering report as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    log::debug!("Target file: {}", args.file.display());

    let outcome = run(&args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        FixOutcome::Updated(report) => {
            let verb = if args.dry_run { "Would update" } else { "Updated" };
            eprintln!(
                "{} {}: inserted slide {}, {} markers and {} displays rewritten, {} slides total",
                verb,
                args.file.display(),
                report.placeholder_position,
                report.marker_replacements,
                report.display_replacements,
                report.new_total
            );
        }
        FixOutcome::NoPlaceholder => {
            eprintln!("No slide \"x\" found in {}. Nothing to fix.", args.file.display());
        }
    }

    Ok(())
}

/// Run the transformation, honoring `--dry-run`.
fn run(args: &Args) -> Result<FixOutcome> {
    if !args.dry_run {
        return slidefix_core::fix_slide_numbers(&args.file)
            .with_context(|| format!("Failed to fix {}", args.file.display()));
    }

    // Dry run: same pipeline, minus the final write.
    let content = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    Ok(match renumber_document(&content) {
        Some((_, report)) => FixOutcome::Updated(report),
        None => FixOutcome::NoPlaceholder,
    })
}
