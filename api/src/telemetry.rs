//! Tracing subscriber set-up

use lf_shared::LoggingConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},actix_web=info,sqlx=warn", config.level)));

    let fmt_layer = fmt::layer()
        .with_ansi(config.colored)
        .with_target(config.with_target);

    // A second call keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
