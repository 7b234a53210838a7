//! Optional tracing subscriber setup for lexivec.
//!
//! Binaries call [`init_tracing`] once at startup; library consumers may
//! bring their own subscriber instead. All output goes to stderr so that
//! ranked results on stdout stay machine-readable.

use tracing::Level;

/// Target prefix used by all lexivec tracing events.
///
/// Consumers can use this to filter lexivec logs:
/// ```text
/// RUST_LOG=lexivec=debug
/// ```
pub const TARGET_PREFIX: &str = "lexivec";

/// Parse a log level string (case-insensitive).
///
/// Recognized values: `trace`, `debug`, `info`, `warn`, `error`.
/// Returns `None` for unrecognized strings.
#[must_use]
pub fn parse_level(s: &str) -> Option<Level> {
    match s.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Returns the effective `tracing::Level` for the given environment.
///
/// Checks `LEXIVEC_LOG_LEVEL` first, then falls back to the provided
/// default.
#[must_use]
pub fn level_from_env(default: Level) -> Level {
    std::env::var("LEXIVEC_LOG_LEVEL")
        .ok()
        .and_then(|s| parse_level(&s))
        .unwrap_or(default)
}

/// Install a stderr subscriber at the environment-resolved level.
///
/// Safe to call more than once; subsequent calls are no-ops.
pub fn init_tracing(default: Level) {
    let level = level_from_env(default);
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}
