//! Diagnostic output for the `breakpoints` binary.
//!
//! The library only emits `tracing` events. Binaries decide where they go by
//! calling [`initialize`] once at startup.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `debug` or
/// `breakpoints=trace`.
pub const LOG_ENV: &str = "BREAKPOINTS_LOG";

/// Map a count of `-v` flags to the default level.
#[must_use]
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install a stderr subscriber. [`LOG_ENV`] takes precedence over
/// `verbosity`. Calling this more than once keeps the first subscriber.
pub fn initialize(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity).as_str()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_the_level() {
        assert_eq!(level_for_verbosity(0), Level::WARN);
        assert_eq!(level_for_verbosity(1), Level::INFO);
        assert_eq!(level_for_verbosity(2), Level::DEBUG);
        assert_eq!(level_for_verbosity(7), Level::TRACE);
    }

    #[test]
    fn initialize_is_idempotent() {
        initialize(0);
        initialize(3);
    }
}
