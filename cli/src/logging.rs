//! Logging configuration
//!
//! Stdout-only tracing output. Set `DEBUG_LOGGING=1` to enable debug output
//! for the hourglass crates.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the stdout tracing subscriber.
///
/// INFO+ by default, DEBUG+ for hourglass crates when `DEBUG_LOGGING=1`.
pub fn init() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true);

    let filter_directive = if debug_logging {
        "info,hourglass=debug,hourglass_core=debug"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(EnvFilter::new(filter_directive))
        .init();
}
