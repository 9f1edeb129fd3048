//! Outbound HTTP for the Paystack and Resend adapters.
//!
//! Both providers are reached through one client configuration so a slow
//! provider cannot hold a webhook request open indefinitely.

use reqwest::Client;
use std::time::Duration;

/// TCP handshake plus TLS.
pub const PROVIDER_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Whole request, response body included.
pub const PROVIDER_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Sent on every provider call so requests are identifiable in their dashboards.
pub const PROVIDER_USER_AGENT: &str = concat!("wavy-receipts/", env!("CARGO_PKG_VERSION"));

pub fn try_build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(PROVIDER_USER_AGENT)
        .connect_timeout(PROVIDER_CONNECT_TIMEOUT)
        .timeout(PROVIDER_REQUEST_TIMEOUT)
        .build()
}
