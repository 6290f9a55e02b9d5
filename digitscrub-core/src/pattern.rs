//! pattern.rs - Manages the compilation and caching of the digit-run pattern.
//!
//! This module provides a thread-safe, cached mechanism to convert a
//! `ScrubConfig` into a compiled regular expression, optimized for
//! repeated engine construction. It uses a global, shared cache to avoid
//! redundant compilation.

use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::config::ScrubConfig;
use crate::errors::ScrubError;

lazy_static! {
    /// A thread-safe, global cache for compiled patterns.
    /// The key is the (min_digits, max_digits) pair of the config.
    static ref PATTERN_CACHE: RwLock<HashMap<(usize, usize), Arc<Regex>>> =
        RwLock::new(HashMap::new());
}

/// Renders the boundary-anchored digit-run pattern for a config.
///
/// Word-boundary anchors mean a run flanked by a letter, an underscore, or
/// a further digit does not match; a run flanked by punctuation, whitespace,
/// or a text edge does.
pub fn build_pattern(config: &ScrubConfig) -> String {
    format!(
        r"\b[0-9]{{{},{}}}\b",
        config.min_digits, config.max_digits
    )
}

/// Compiles the digit-run pattern for `config`.
/// This is the low-level function that performs the actual regex compilation.
pub fn compile_pattern(config: &ScrubConfig) -> Result<Regex, ScrubError> {
    let pattern = build_pattern(config);
    debug!("Attempting to compile digit-run pattern '{}'", pattern);

    let regex = RegexBuilder::new(&pattern)
        .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
        .build()
        .map_err(|e| ScrubError::PatternCompilation(pattern.clone(), e))?;

    debug!("Pattern '{}' compiled successfully.", pattern);
    Ok(regex)
}

/// Gets a compiled pattern from the cache or compiles it if not found.
///
/// This is the public entry point for retrieving compiled patterns. It
/// returns an `Arc` to the compiled regex, allowing for cheap sharing.
pub fn get_or_compile_pattern(config: &ScrubConfig) -> Result<Arc<Regex>, ScrubError> {
    let cache_key = (config.min_digits, config.max_digits);

    // Attempt to acquire a read lock first.
    {
        let cache = PATTERN_CACHE.read().unwrap();
        if let Some(regex) = cache.get(&cache_key) {
            debug!("Serving compiled pattern from cache for key: {:?}", cache_key);
            return Ok(Arc::clone(regex));
        }
    } // Read lock is released here.

    // Not in cache, so we compile.
    debug!("Compiled pattern not found in cache. Compiling now.");
    let compiled_arc = Arc::new(compile_pattern(config)?);

    // Acquire a write lock to insert the new pattern.
    PATTERN_CACHE
        .write()
        .unwrap()
        .insert(cache_key, Arc::clone(&compiled_arc));

    debug!("Successfully compiled and cached pattern for key: {:?}", cache_key);
    Ok(compiled_arc)
}
