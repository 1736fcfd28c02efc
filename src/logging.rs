//! Diagnostic output setup for the binaries.
//!
//! Library code only emits `tracing` events; binaries call [`init_logging`]
//! once so per-file load problems reach stderr while stdout stays reserved
//! for results.

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Build the filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_LEVEL`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install a compact stderr subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_logging();
        init_logging();
        tracing::info!("logging initialized twice");
    }
}
