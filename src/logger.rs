//! Logging setup for the dagpath CLI.
//!
//! Uses the `tracing` ecosystem. Logs go to stderr so that stdout carries
//! only the report.
//!
//! The level is chosen in this order:
//! 1. `--verbose`: DEBUG for dagpath
//! 2. `--quiet`: ERROR only
//! 3. `RUST_LOG` environment variable
//! 4. Default: INFO for dagpath

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter for the given verbosity flags.
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("dagpath=debug")
    } else if quiet {
        EnvFilter::new("dagpath=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dagpath=info"))
    }
}

/// Initialize the tracing subscriber.
///
/// Call once at the start of the program. A second call is ignored.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // Only fails if a global subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_verbose_wins_over_quiet() {
        let filter = build_filter(true, true);
        assert_eq!(filter.to_string(), "dagpath=debug");
    }

    #[test]
    fn test_filter_quiet() {
        let filter = build_filter(false, true);
        assert_eq!(filter.to_string(), "dagpath=error");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logger(false, true, true);
        init_logger(false, true, true);
    }
}
