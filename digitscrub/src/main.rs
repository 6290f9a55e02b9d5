// digitscrub/src/main.rs
//! Digitscrub entry point.
//!
//! Validates the digit range before any file is touched, builds one scrub
//! engine for the whole batch, and runs the sequential file processor.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use is_terminal::IsTerminal;
use log::info;

use digitscrub::cli::Cli;
use digitscrub::commands::scrub::{run_scrub, ScrubOptions};
use digitscrub::logger;
use digitscrub::ui::summary::print_summary;
use digitscrub_core::{validate_range, ScrubConfig, Scrubber};

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    info!("digitscrub started. Version: {}", env!("CARGO_PKG_VERSION"));

    // An invalid range is a usage error: report it through clap and exit
    // non-zero before any file I/O begins.
    if let Err(e) = validate_range(args.min, args.max) {
        let mut cmd = Cli::command();
        cmd.error(clap::error::ErrorKind::ValueValidation, e.to_string())
            .exit();
    }

    let config = ScrubConfig::new(args.min, args.max)?;
    let mut scrubber = Scrubber::new(config)?;

    let opts = ScrubOptions {
        files: args.files.clone(),
        output_dir: args.output.clone(),
    };
    let summary = run_scrub(&mut scrubber, &opts)?;

    if !args.quiet && !args.no_summary {
        let stderr = std::io::stderr();
        let supports_color = stderr.is_terminal();
        print_summary(&summary, &mut stderr.lock(), supports_color)
            .context("Failed to write scrub summary")?;
    }

    if let Some(path) = &args.json_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create JSON summary file: {}", path.display()))?;
        serde_json::to_writer_pretty(file, &summary)
            .context("Failed to serialize scrub summary")?;
        info!("Scrub summary exported to {}", path.display());
    }

    Ok(())
}
