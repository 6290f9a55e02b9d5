//! Provides core data structures for reporting scrub results.

use serde::Serialize;

/// Represents a single replaced digit run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrubMatch {
    /// The matched run as it appeared in the source text.
    pub original: String,
    /// The counter-encoded stand-in that replaced it.
    pub replacement: String,
    /// Byte offset of the run's first character in the source text.
    pub start: usize,
    /// Byte offset one past the run's last character.
    pub end: usize,
    /// The run's first digit (0-9), which keys the counter sequence.
    pub leading_digit: u8,
    /// The counter value consumed by this replacement.
    pub counter_value: u64,
}

/// Aggregate statistics for a whole scrub batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScrubSummary {
    pub files_processed: usize,
    pub files_skipped: usize,
    pub total_replacements: usize,
    pub replacements_per_digit: [usize; 10],
}

impl ScrubSummary {
    /// Folds one processed file's matches into the batch totals.
    pub fn record_file(&mut self, matches: &[ScrubMatch]) {
        self.files_processed += 1;
        self.total_replacements += matches.len();
        for m in matches {
            self.replacements_per_digit[usize::from(m.leading_digit)] += 1;
        }
    }

    /// Notes a path that was skipped as not a regular file.
    pub fn record_skip(&mut self) {
        self.files_skipped += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_match(leading_digit: u8) -> ScrubMatch {
        ScrubMatch {
            original: "4821".to_string(),
            replacement: "4441".to_string(),
            start: 5,
            end: 9,
            leading_digit,
            counter_value: 1,
        }
    }

    #[test]
    fn record_file_accumulates_per_digit() {
        let mut summary = ScrubSummary::default();
        summary.record_file(&[sample_match(4), sample_match(4), sample_match(9)]);
        summary.record_file(&[sample_match(4)]);
        assert_eq!(summary.files_processed, 2);
        assert_eq!(summary.total_replacements, 4);
        assert_eq!(summary.replacements_per_digit[4], 3);
        assert_eq!(summary.replacements_per_digit[9], 1);
    }

    #[test]
    fn record_skip_counts_separately() {
        let mut summary = ScrubSummary::default();
        summary.record_skip();
        summary.record_file(&[]);
        assert_eq!(summary.files_skipped, 1);
        assert_eq!(summary.files_processed, 1);
        assert_eq!(summary.total_replacements, 0);
    }
}
