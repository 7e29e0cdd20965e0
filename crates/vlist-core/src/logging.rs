#![forbid(unsafe_code)]

//! Logging glue.
//!
//! All vlist crates log through `tracing`. Library crates only emit spans and
//! events when their `tracing` feature is on; nothing is printed unless the
//! application installs a subscriber.
//!
//! With the `tracing-json` feature, [`init_json_logging`] installs a JSON
//! formatter on stderr filtered by `RUST_LOG` (default `info`).

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, error, info, info_span, trace, trace_span, warn};

/// Install a global JSON subscriber honoring `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
