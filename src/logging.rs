//! Logging setup for the `itembank` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary.
//!
//! - `error`: failed list or detail loads
//! - `warn`: persistence failures (default level)
//! - `info`: restored state, `-v`
//! - `debug`: issued requests, stale responses, `-vv`

use std::io;

use tracing::Level;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Map `-v` occurrences to a level.
pub fn level_from_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Build the event filter. `RUST_LOG` takes precedence over `level`; other
/// crates stay at `warn` unless it says otherwise.
pub fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!("warn,itembank={level}"))
    })
}

/// Install a stderr fmt subscriber for the given verbosity.
pub fn init_logging(verbosity: u8) -> Result<(), TryInitError> {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(verbosity >= 2)
        .without_time();

    tracing_subscriber::registry()
        .with(build_env_filter(level_from_verbosity(verbosity)))
        .with(layer)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_from_verbosity(0), Level::WARN);
        assert_eq!(level_from_verbosity(1), Level::INFO);
        assert_eq!(level_from_verbosity(2), Level::DEBUG);
        assert_eq!(level_from_verbosity(9), Level::TRACE);
    }
}
