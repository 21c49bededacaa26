// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use crate::error::Result;
use crate::models::ApiConfig;

/// Create a configured asynchronous HTTP client for the portal API.
pub fn create_client(config: &ApiConfig) -> Result<reqwest::Client> {
    create_client_with_timeout(&config.user_agent, config.timeout_secs)
}

/// Create a client with an explicit user agent and timeout.
pub fn create_client_with_timeout(user_agent: &str, timeout_secs: u64) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;
    Ok(client)
}
