//! Diagnostic logging setup

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber
///
/// Logs go to stderr so command output stays clean. The filter comes from
/// `RUST_LOG`, falling back to warnings only.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("budgetbook=warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
