//! engine.rs - The scrub engine: applies the counter-based substitution rule.
//!
//! `Scrubber` owns the compiled digit-run pattern and the per-digit counter
//! state, and splices replacements into a fresh output buffer left to right.
//! Replaced text is never rescanned, so a stand-in that itself qualifies as
//! a digit run is only picked up by a later, separate invocation.

use std::sync::Arc;

use log::{debug, trace};
use regex::Regex;

use crate::config::ScrubConfig;
use crate::counters::DigitCounters;
use crate::errors::ScrubError;
use crate::pattern::get_or_compile_pattern;
use crate::summary::ScrubMatch;

#[derive(Debug)]
pub struct Scrubber {
    regex: Arc<Regex>,
    config: ScrubConfig,
    counters: DigitCounters,
}

impl Scrubber {
    /// Builds an engine with fresh counter state.
    pub fn new(config: ScrubConfig) -> Result<Self, ScrubError> {
        Self::with_counters(config, DigitCounters::new())
    }

    /// Builds an engine that continues from existing counter state.
    pub fn with_counters(
        config: ScrubConfig,
        counters: DigitCounters,
    ) -> Result<Self, ScrubError> {
        let regex = get_or_compile_pattern(&config)?;
        Ok(Self {
            regex,
            config,
            counters,
        })
    }

    pub fn config(&self) -> &ScrubConfig {
        &self.config
    }

    pub fn counters(&self) -> &DigitCounters {
        &self.counters
    }

    /// Replaces every qualifying digit run in `content`.
    ///
    /// Matches are consumed in the order they appear; each one advances the
    /// counter for its leading digit. Returns the transformed text along
    /// with a record of every replacement made.
    pub fn scrub(&mut self, content: &str) -> (String, Vec<ScrubMatch>) {
        let regex = Arc::clone(&self.regex);
        let mut output = String::with_capacity(content.len());
        let mut matches = Vec::new();
        let mut last_end = 0usize;

        for m in regex.find_iter(content) {
            let run = m.as_str();
            // The pattern only matches ASCII digits, so the first byte is one.
            let leading_digit = run.as_bytes()[0] - b'0';
            let counter_value = self.counters.bump(leading_digit);
            let replacement = render_replacement(run.len(), leading_digit, counter_value);
            trace!(
                "Replacing run at {}..{}: '{}' -> '{}'",
                m.start(),
                m.end(),
                run,
                replacement
            );

            output.push_str(&content[last_end..m.start()]);
            output.push_str(&replacement);
            last_end = m.end();

            matches.push(ScrubMatch {
                original: run.to_string(),
                replacement,
                start: m.start(),
                end: m.end(),
                leading_digit,
                counter_value,
            });
        }
        output.push_str(&content[last_end..]);

        debug!(
            "Scrub pass complete: {} replacement(s), {} -> {} bytes",
            matches.len(),
            content.len(),
            output.len()
        );
        (output, matches)
    }

    /// Counts qualifying runs without consuming counter values.
    ///
    /// Used for stats-only inspection; the engine state is untouched, so a
    /// later `scrub` of the same content still starts its sequence where
    /// the counters currently stand.
    pub fn analyze(&self, content: &str) -> Vec<(u8, String)> {
        self.regex
            .find_iter(content)
            .map(|m| {
                let run = m.as_str();
                (run.as_bytes()[0] - b'0', run.to_string())
            })
            .collect()
    }
}

/// Builds the padded counter stand-in for a run.
///
/// The padding repeat count clamps to zero once the counter's decimal form
/// outgrows the run, so the counter value is always emitted in full; in
/// that boundary case the replacement is longer than the original run.
fn render_replacement(run_len: usize, leading_digit: u8, counter: u64) -> String {
    let counter_str = counter.to_string();
    let pad_len = run_len.saturating_sub(counter_str.len());
    let pad_char = char::from(b'0' + leading_digit);
    let mut replacement = String::with_capacity(pad_len + counter_str.len());
    replacement.extend(std::iter::repeat(pad_char).take(pad_len));
    replacement.push_str(&counter_str);
    replacement
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrubber(min: usize, max: usize) -> Scrubber {
        Scrubber::new(ScrubConfig::new(min, max).unwrap()).unwrap()
    }

    #[test]
    fn replaces_runs_with_counter_encoded_stand_ins() {
        let mut engine = scrubber(4, 6);
        let (output, matches) = engine.scrub("acct 4821 and 4999");
        assert_eq!(output, "acct 4441 and 4442");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].original, "4821");
        assert_eq!(matches[0].replacement, "4441");
        assert_eq!(matches[0].counter_value, 1);
        assert_eq!(matches[1].counter_value, 2);
    }

    #[test]
    fn preserves_run_length_and_leading_digit() {
        let mut engine = scrubber(6, 6);
        let (output, matches) = engine.scrub("id=987654;id=912345");
        assert_eq!(output, "id=999991;id=999992");
        for m in &matches {
            assert_eq!(m.replacement.len(), m.original.len());
            assert!(m.replacement.starts_with('9'));
        }
    }

    #[test]
    fn runs_outside_bounds_are_untouched() {
        let mut engine = scrubber(4, 6);
        let input = "a 123 b 1234567 c 12345";
        let (output, _) = engine.scrub(input);
        // 123 is too short, 1234567 too long; only 12345 qualifies.
        assert_eq!(output, "a 123 b 1234567 c 11111");
    }

    #[test]
    fn word_boundary_blocks_letter_and_underscore_neighbors() {
        let mut engine = scrubber(6, 20);
        let input = "abc123456 _123456_ x123456y";
        let (output, matches) = engine.scrub(input);
        assert_eq!(output, input);
        assert!(matches.is_empty());
    }

    #[test]
    fn punctuation_and_edges_are_boundaries() {
        let mut engine = scrubber(6, 20);
        let (output, _) = engine.scrub("123456,(654321)-111111-");
        assert_eq!(output, "111111,(666661)-111112-");
    }

    #[test]
    fn counters_persist_across_scrub_calls() {
        let mut engine = scrubber(4, 6);
        let (first, _) = engine.scrub("4821");
        let (second, _) = engine.scrub("4999");
        assert_eq!(first, "4441");
        assert_eq!(second, "4442");
        assert_eq!(engine.counters().count(4), 2);
    }

    #[test]
    fn rescrubbing_output_is_not_idempotent() {
        // Stand-ins are themselves digit runs, so a second pass keeps
        // incrementing the counters and rewrites them again.
        let mut engine = scrubber(4, 6);
        let (first, _) = engine.scrub("acct 4821 and 4999");
        let (second, matches) = engine.scrub(&first);
        assert_eq!(first, "acct 4441 and 4442");
        assert_eq!(second, "acct 4443 and 4444");
        assert_ne!(first, second);
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn padding_clamps_when_counter_outgrows_run() {
        let mut engine = scrubber(1, 2);
        for _ in 0..99 {
            engine.scrub("7");
        }
        // Counter for '7' is now 99; the next two single-digit runs get
        // three-digit stand-ins with no room left for padding.
        let (output, matches) = engine.scrub("7 7");
        assert_eq!(output, "100 101");
        assert_eq!(matches[0].replacement, "100");
        assert_eq!(matches[0].original.len(), 1);
    }

    #[test]
    fn counters_key_on_leading_digit_not_length() {
        // A 4-digit and a 6-digit run with the same leading digit share
        // one counter sequence.
        let mut engine = scrubber(4, 6);
        let (output, _) = engine.scrub("5123 512345");
        assert_eq!(output, "5551 555552");
    }

    #[test]
    fn analyze_counts_without_consuming_counters() {
        let mut engine = scrubber(4, 6);
        let found = engine.analyze("acct 4821 and 4999");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0], (4, "4821".to_string()));
        assert_eq!(engine.counters().total(), 0);
        let (output, _) = engine.scrub("acct 4821 and 4999");
        assert_eq!(output, "acct 4441 and 4442");
    }

    #[test]
    fn empty_and_digitless_content_pass_through() {
        let mut engine = scrubber(6, 20);
        assert_eq!(engine.scrub("").0, "");
        assert_eq!(engine.scrub("no numbers here").0, "no numbers here");
        assert_eq!(engine.counters().total(), 0);
    }

    #[test]
    fn render_replacement_pads_to_run_length() {
        assert_eq!(render_replacement(4, 4, 1), "4441");
        assert_eq!(render_replacement(6, 2, 1), "222221");
        assert_eq!(render_replacement(4, 9, 12), "9912");
        assert_eq!(render_replacement(2, 3, 100), "100");
        assert_eq!(render_replacement(1, 0, 5), "5");
    }
}
