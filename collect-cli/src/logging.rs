//! Development-time tracing for the `collect` binary.
//!
//! Diagnostics only: output goes to stderr and never mixes with the JSON
//! written to stdout.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directives used when `RUST_LOG` is unset: warnings from this crate only.
pub const DEFAULT_FILTER: &str = "collect_cli=warn";

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to [`DEFAULT_FILTER`] if unset.
///
/// # Example
/// ```bash
/// RUST_LOG=collect_cli=debug collect --input data.json unique
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
