// digitscrub/src/ui/summary.rs
//! Renders the end-of-run scrub summary.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use digitscrub_core::ScrubSummary;

/// Writes the scrub summary to `writer`.
///
/// Colors are applied only when `supports_color` is set, so piped output
/// stays plain and assertable.
pub fn print_summary(
    summary: &ScrubSummary,
    writer: &mut impl Write,
    supports_color: bool,
) -> io::Result<()> {
    let header = "--- Scrub Summary ---";
    if supports_color {
        writeln!(writer, "{}", header.yellow().bold())?;
    } else {
        writeln!(writer, "{header}")?;
    }

    writeln!(
        writer,
        "Files processed: {}, skipped: {}",
        summary.files_processed, summary.files_skipped
    )?;
    writeln!(writer, "Total replacements: {}", summary.total_replacements)?;

    for (digit, count) in summary
        .replacements_per_digit
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
    {
        let line = format!("  runs starting with '{digit}': {count}");
        if supports_color {
            writeln!(writer, "{}", line.green())?;
        } else {
            writeln!(writer, "{line}")?;
        }
    }
    Ok(())
}
