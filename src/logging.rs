//! Log threshold handling
//!
//! `RUST_LOG` is read once at startup and stored as the `log` crate's max
//! level. Activity-log filtering reads it back from there.

use crate::error_classifier::LogLevel;
use log::LevelFilter;

/// Threshold used when `RUST_LOG` is unset or unparseable.
const DEFAULT_FILTER: LevelFilter = LevelFilter::Info;

/// Parses `RUST_LOG` style directives into a single threshold.
///
/// Module-scoped directives (`falcon_dashboard=debug,reqwest=info`) resolve to
/// the first level that parses.
pub fn parse_filter(directives: &str) -> LevelFilter {
    directives
        .split(',')
        .filter_map(|directive| directive.trim().rsplit('=').next())
        .find_map(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(DEFAULT_FILTER)
}

/// Reads `RUST_LOG` and installs it as the process-wide max level.
pub fn init_from_env() -> LevelFilter {
    let filter = std::env::var("RUST_LOG")
        .map(|value| parse_filter(&value))
        .unwrap_or(DEFAULT_FILTER);
    log::set_max_level(filter);
    filter
}

/// Whether `level` passes `threshold`.
pub fn passes(level: LogLevel, threshold: LevelFilter) -> bool {
    LevelFilter::from(level) <= threshold
}

/// Whether `level` passes the threshold installed by [`init_from_env`].
pub fn is_enabled(level: LogLevel) -> bool {
    passes(level, log::max_level())
}
