//! Shared reqwest client construction.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

use aequora_core::config::api::ApiConfig;
use aequora_core::error::{AppError, ErrorKind};
use aequora_core::result::AppResult;

/// Build a pooled HTTP client with the configured timeouts.
pub fn build_client(config: &ApiConfig) -> AppResult<Client> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .build()
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to build HTTP client: {e}"),
                e,
            )
        })
}
