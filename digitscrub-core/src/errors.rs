//! errors.rs - Custom error types for the digitscrub-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.

use thiserror::Error;

/// This enum represents all possible error types in the `digitscrub-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScrubError {
    #[error("minimum digits ({min}) must be less than or equal to maximum digits ({max})")]
    RangeOrder { min: usize, max: usize },

    #[error("digit range must be between 1 and 100, got {min}..={max}")]
    RangeBounds { min: usize, max: usize },

    #[error("failed to compile digit-run pattern '{0}': {1}")]
    PatternCompilation(String, regex::Error),

    #[error("an unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}
