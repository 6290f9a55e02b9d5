// digitscrub/src/cli.rs
//! This file defines the command-line interface (CLI) for the digitscrub
//! application, including all available arguments.

use clap::Parser;
use std::path::PathBuf;

use digitscrub_core::{DEFAULT_MAX_DIGITS, DEFAULT_MIN_DIGITS};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "digitscrub",
    version = env!("CARGO_PKG_VERSION"),
    about = "Replace digit runs in text files with counter-encoded stand-ins",
    long_about = "Digitscrub scans plain-text files for runs of decimal digits whose length falls within a configurable range and replaces each run with a same-width stand-in built from the run's leading digit and an internal sequence counter. This lightly anonymizes numeric identifiers (account numbers, IDs) embedded in files while keeping field widths intact for downstream tooling.",
    after_help = "Example: digitscrub *.json -o scrubbed --min 4 --max 12",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Files to process.
    #[arg(required = true, value_name = "FILE", help = "One or more files to process.")]
    pub files: Vec<PathBuf>,

    /// Output directory for modified files.
    #[arg(
        long,
        short = 'o',
        value_name = "DIR",
        help = "Output directory for modified files. If not specified, original files will be overwritten."
    )]
    pub output: Option<PathBuf>,

    /// Minimum digit-run length to replace.
    #[arg(
        long,
        value_name = "INT",
        default_value_t = DEFAULT_MIN_DIGITS,
        help = "Minimum number of digits to replace (default: 6)."
    )]
    pub min: usize,

    /// Maximum digit-run length to replace.
    #[arg(
        long,
        value_name = "INT",
        default_value_t = DEFAULT_MAX_DIGITS,
        help = "Maximum number of digits to replace (default: 20)."
    )]
    pub max: usize,

    /// Disable informational messages and the scrub summary.
    #[arg(long, short = 'q', help = "Suppress all informational messages and the scrub summary.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for this run)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// Suppress the scrub summary.
    #[arg(long = "no-summary", help = "Suppress the scrub summary.")]
    pub no_summary: bool,

    /// Export the scrub summary to a JSON file.
    #[arg(
        long = "json-file",
        value_name = "FILE",
        help = "Export the scrub summary to a JSON file."
    )]
    pub json_file: Option<PathBuf>,
}
