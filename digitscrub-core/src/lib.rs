// digitscrub-core/src/lib.rs
//! # Digitscrub Core Library
//!
//! `digitscrub-core` provides the platform-independent logic for replacing
//! digit runs in text with deterministic, width-preserving stand-ins. It
//! defines the scrub configuration and its validation, the compiled
//! boundary-anchored digit-run pattern, the explicit per-digit counter
//! state, and the engine that applies the substitution rule.
//!
//! The library is pure with respect to I/O: it transforms strings and
//! reports what it replaced, leaving file handling to the caller.
//!
//! ## Modules
//!
//! * `config`: Defines `ScrubConfig` and the pure `validate_range` check.
//! * `pattern`: Builds, compiles, and caches the digit-run pattern.
//! * `counters`: The explicit `DigitCounters` state object.
//! * `engine`: The `Scrubber` engine applying the counter-based rule.
//! * `summary`: `ScrubMatch` and `ScrubSummary` reporting types.
//! * `errors`: The structured `ScrubError` enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use digitscrub_core::{ScrubConfig, Scrubber};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // Replace digit runs of 4 to 6 characters.
//!     let config = ScrubConfig::new(4, 6)?;
//!     let mut scrubber = Scrubber::new(config)?;
//!
//!     let (scrubbed, matches) = scrubber.scrub("acct 4821 and 4999");
//!     assert_eq!(scrubbed, "acct 4441 and 4442");
//!     assert_eq!(matches.len(), 2);
//!
//!     // The same engine carries its counters into the next input.
//!     let (next, _) = scrubber.scrub("ref 4000");
//!     assert_eq!(next, "ref 4443");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return the structured [`ScrubError`] enum; range
//! violations are reported before any pattern compilation takes place.

pub mod config;
pub mod counters;
pub mod engine;
pub mod errors;
pub mod pattern;
pub mod summary;

/// Re-exports the configuration type, validation, and bound constants.
pub use config::{
    validate_range, ScrubConfig, DEFAULT_MAX_DIGITS, DEFAULT_MIN_DIGITS, MAX_RUN_LENGTH,
    MIN_RUN_LENGTH,
};

/// Re-exports the explicit counter state object.
pub use counters::DigitCounters;

/// Re-exports the scrub engine.
pub use engine::Scrubber;

/// Re-exports the custom error type for clear error reporting.
pub use errors::ScrubError;

/// Re-exports pattern construction and the compile cache entry point.
pub use pattern::{build_pattern, compile_pattern, get_or_compile_pattern};

/// Re-exports the match and batch summary reporting types.
pub use summary::{ScrubMatch, ScrubSummary};
