//! Scrub command implementation: sequential batch processing of files.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use digitscrub_core::{ScrubSummary, Scrubber};

/// Options for one batch run.
pub struct ScrubOptions {
    pub files: Vec<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

/// Processes every path in order through a single engine instance.
///
/// Counter state lives in `scrubber` and is never reset between files, so
/// later files continue the sequences started by earlier ones. Paths that
/// are not regular files are skipped with a notice; I/O failures abort the
/// whole batch with no rollback of files already written.
pub fn run_scrub(scrubber: &mut Scrubber, opts: &ScrubOptions) -> Result<ScrubSummary> {
    info!("Starting scrub operation over {} path(s).", opts.files.len());

    if let Some(dir) = &opts.output_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
        debug!("Output directory ready: {}", dir.display());
    }

    let mut summary = ScrubSummary::default();
    for path in &opts.files {
        if !path.is_file() {
            eprintln!("Skipping {}: not a regular file", path.display());
            summary.record_skip();
            continue;
        }
        process_file(scrubber, path, opts.output_dir.as_deref(), &mut summary)?;
    }

    info!("Scrub operation completed.");
    Ok(summary)
}

/// Reads one file, scrubs it, and writes the result to its destination.
fn process_file(
    scrubber: &mut Scrubber,
    path: &Path,
    output_dir: Option<&Path>,
    summary: &mut ScrubSummary,
) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    let (scrubbed, matches) = scrubber.scrub(&content);
    debug!(
        "Scrubbed {}: {} replacement(s), {} -> {} bytes",
        path.display(),
        matches.len(),
        content.len(),
        scrubbed.len()
    );

    let output_path = resolve_output_path(path, output_dir);
    fs::write(&output_path, scrubbed)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    summary.record_file(&matches);
    println!("Processed: {}", path.display());
    Ok(())
}

/// Mirrors the input basename into the output directory, or keeps the
/// original path for an in-place overwrite.
fn resolve_output_path(path: &Path, output_dir: Option<&Path>) -> PathBuf {
    if let (Some(dir), Some(name)) = (output_dir, path.file_name()) {
        dir.join(name)
    } else {
        path.to_path_buf()
    }
}
