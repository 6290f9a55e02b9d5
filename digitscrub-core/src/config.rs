//! Configuration for the digitscrub scrub engine.
//!
//! This module defines `ScrubConfig`, the inclusive digit-run length bounds
//! the engine matches against, together with the pure range validation that
//! every entry point runs before any file I/O begins.

use serde::{Deserialize, Serialize};

use crate::errors::ScrubError;

/// Lowest permitted value for `min_digits`.
pub const MIN_RUN_LENGTH: usize = 1;
/// Highest permitted value for `max_digits`.
pub const MAX_RUN_LENGTH: usize = 100;
/// Default minimum digit-run length.
pub const DEFAULT_MIN_DIGITS: usize = 6;
/// Default maximum digit-run length.
pub const DEFAULT_MAX_DIGITS: usize = 20;

/// Inclusive length bounds for the digit runs the engine replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScrubConfig {
    /// Shortest run length that qualifies for replacement.
    pub min_digits: usize,
    /// Longest run length that qualifies for replacement.
    pub max_digits: usize,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            min_digits: DEFAULT_MIN_DIGITS,
            max_digits: DEFAULT_MAX_DIGITS,
        }
    }
}

impl ScrubConfig {
    /// Builds a validated configuration.
    ///
    /// Fails with a range error before any I/O when the bounds are out of
    /// order or fall outside `[MIN_RUN_LENGTH, MAX_RUN_LENGTH]`.
    pub fn new(min_digits: usize, max_digits: usize) -> Result<Self, ScrubError> {
        validate_range(min_digits, max_digits)?;
        Ok(Self {
            min_digits,
            max_digits,
        })
    }
}

/// Validates an inclusive digit-run length range.
///
/// Pure function; performs no I/O and touches no state.
pub fn validate_range(min_digits: usize, max_digits: usize) -> Result<(), ScrubError> {
    if min_digits > max_digits {
        return Err(ScrubError::RangeOrder {
            min: min_digits,
            max: max_digits,
        });
    }
    if min_digits < MIN_RUN_LENGTH || max_digits > MAX_RUN_LENGTH {
        return Err(ScrubError::RangeBounds {
            min: min_digits,
            max: max_digits,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_defaults_and_extremes() {
        assert!(validate_range(DEFAULT_MIN_DIGITS, DEFAULT_MAX_DIGITS).is_ok());
        assert!(validate_range(1, 100).is_ok());
        assert!(validate_range(4, 4).is_ok());
    }

    #[test]
    fn rejects_inverted_range() {
        let err = validate_range(10, 5).unwrap_err();
        assert!(matches!(err, ScrubError::RangeOrder { min: 10, max: 5 }));
    }

    #[test]
    fn rejects_out_of_bounds_range() {
        assert!(matches!(
            validate_range(0, 50).unwrap_err(),
            ScrubError::RangeBounds { min: 0, max: 50 }
        ));
        assert!(matches!(
            validate_range(1, 101).unwrap_err(),
            ScrubError::RangeBounds { .. }
        ));
    }

    #[test]
    fn new_rejects_what_validate_rejects() {
        assert!(ScrubConfig::new(10, 5).is_err());
        let config = ScrubConfig::new(4, 12).unwrap();
        assert_eq!(config.min_digits, 4);
        assert_eq!(config.max_digits, 12);
    }

    #[test]
    fn default_matches_documented_bounds() {
        let config = ScrubConfig::default();
        assert_eq!(config.min_digits, 6);
        assert_eq!(config.max_digits, 20);
    }
}
