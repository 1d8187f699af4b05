//! Logging initialization with environment-based formatters
//!
//! - Production: Structured JSON logs for cloud monitoring
//! - Sandbox: Colorful, human-readable logs for development
//!
//! Logs go to stderr; stdout carries the cluster report.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Filter from `RUST_LOG`, falling back to `info`
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber for the configured environment
pub fn init_logging(config: &Config) {
    let layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    if config.is_production() {
        tracing_subscriber::registry()
            .with(env_filter())
            .with(layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter())
            .with(layer.with_ansi(true))
            .init();
    }
}
