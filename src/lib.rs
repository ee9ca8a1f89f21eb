//! Aequora notification client facade.
//!
//! Re-exports the member crates and provides the logging bootstrap used
//! by embedding applications.

pub use aequora_client as client;
pub use aequora_core as core;
pub use aequora_entity as entity;
pub use aequora_feed as feed;
pub use aequora_store as store;

use aequora_core::config::logging::LoggingConfig;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize tracing/logging.
///
/// `RUST_LOG` takes precedence over the configured level. Calling this
/// more than once is an error in tracing-subscriber; embedders that
/// install their own subscriber should skip it.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}
