//! Structured logging setup for the command-line tool

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Level used when `RUST_LOG` is not set
pub const fn default_level(quiet: bool, verbose: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::WARN,
        (false, true) => LevelFilter::DEBUG,
        (false, false) => LevelFilter::INFO,
    }
}

/// Build the filter: `RUST_LOG` directives win over the default level
pub fn env_filter(quiet: bool, verbose: bool) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_level(quiet, verbose).into())
        .from_env_lossy()
}

/// Install the global subscriber, writing to stderr
///
/// Calling this more than once leaves the first subscriber in place.
pub fn init(quiet: bool, verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(env_filter(quiet, verbose))
        .try_init();
}
