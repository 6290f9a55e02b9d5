//! counters.rs - Explicit per-digit counter state for the scrub engine.
//!
//! The counters are an ordinary value owned by whoever constructs the
//! engine, so callers control their lifetime: the CLI keeps one instance
//! alive for a whole batch, while tests construct fresh state per case.

use serde::Serialize;

/// Tallies how many qualifying digit runs have been seen per leading digit.
///
/// Counters are keyed by the run's first digit only, not by run length, so
/// runs of different lengths starting with the same digit share one
/// sequence. Counts are never reset between files within a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DigitCounters {
    counts: [u64; 10],
}

impl DigitCounters {
    /// Creates empty counter state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the tally for `digit` and returns the updated value.
    ///
    /// `digit` must be a decimal digit value (0-9).
    pub fn bump(&mut self, digit: u8) -> u64 {
        debug_assert!(digit < 10, "leading digit out of range: {digit}");
        let slot = &mut self.counts[usize::from(digit)];
        *slot += 1;
        *slot
    }

    /// Current tally for `digit`.
    pub fn count(&self, digit: u8) -> u64 {
        self.counts[usize::from(digit)]
    }

    /// Total runs counted across all digits.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Iterates `(digit, count)` pairs for digits seen at least once.
    pub fn nonzero(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(digit, count)| (digit as u8, *count))
    }
}
