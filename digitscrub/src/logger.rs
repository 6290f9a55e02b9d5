// digitscrub/src/logger.rs
//! Logger initialization for the digitscrub CLI.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// An explicit `level` overrides whatever `RUST_LOG` requests; passing
/// `None` leaves the environment's filter in effect, defaulting to
/// warnings when the variable is unset. Initialization is idempotent so
/// test harnesses can call it repeatedly.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    let _ = builder.try_init();
}
