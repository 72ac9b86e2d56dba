//! Logging setup for the stylenav CLI.
//!
//! Logs go to stderr so that stdout carries only results.
//!
//! The filter is picked in this order:
//! 1. `--verbose`: debug for the stylenav crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. the `log_level` setting
//! 5. warnings only

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CRATES: &[&str] = &["stylenav", "stylenav_config", "stylenav_cli"];

/// Filter directive enabling `level` for every stylenav crate.
pub fn crate_filter(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Build the filter for the given flags and configured level.
pub fn build_filter(verbose: bool, quiet: bool, log_level: Option<&str>) -> EnvFilter {
    if verbose {
        EnvFilter::new(crate_filter("debug"))
    } else if quiet {
        EnvFilter::new(crate_filter("error"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(crate_filter(log_level.unwrap_or("warn"))))
    }
}

/// Initialize the global tracing subscriber.
///
/// Call once, before any logging. `log_level` comes from settings and is
/// ignored when a flag or `RUST_LOG` decides the level.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool, log_level: Option<&str>) {
    let filter = build_filter(verbose, quiet, log_level);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
