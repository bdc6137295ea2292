//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `SEQ_ORDER_LOG=seq_order_count=debug`.
pub const LOG_ENV: &str = "SEQ_ORDER_LOG";

/// Install a stderr subscriber filtered by [`LOG_ENV`], defaulting to warnings only.
/// Stdout is left to the count itself. Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new("seq_order_count=warn"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
