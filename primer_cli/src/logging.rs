//! Logging setup shared by every binary.
//!
//! Logs go to stderr so stdout only carries program output.

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Filter used with `--verbose` when `RUST_LOG` is unset
pub const VERBOSE_FILTER: &str = "primer_core=info,primer_cli=info,warn";

/// Filter used otherwise
pub const QUIET_FILTER: &str = "warn";

/// Pick the filter directive: `RUST_LOG` wins, then the verbosity flag.
pub fn filter_directive(verbose: bool, rust_log: Option<&str>) -> String {
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive.to_string(),
        _ if verbose => VERBOSE_FILTER.to_string(),
        _ => QUIET_FILTER.to_string(),
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(verbose, rust_log.as_deref());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(QUIET_FILTER));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_wins() {
        assert_eq!(filter_directive(false, Some("debug")), "debug");
        assert_eq!(filter_directive(true, Some("primer_core=trace")), "primer_core=trace");
    }

    #[test]
    fn test_verbosity_fallback() {
        assert_eq!(filter_directive(true, None), VERBOSE_FILTER);
        assert_eq!(filter_directive(false, None), QUIET_FILTER);
        assert_eq!(filter_directive(false, Some("  ")), QUIET_FILTER);
    }
}
