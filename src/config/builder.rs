//! Fluent builder for `ClientConfig` with validation
//!
//! Every field has a working default, so the builder has no required
//! states; `build` validates what was set and normalizes the base URL.

use anyhow::{Result, anyhow};
use std::time::Duration;
use url::Url;

use super::types::{ClientConfig, DEFAULT_BASE_URL};
use crate::client::DEFAULT_TOP_K;

pub struct ClientConfigBuilder {
    base_url: String,
    request_timeout: Option<Duration>,
    default_top_k: u32,
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
            default_top_k: DEFAULT_TOP_K,
        }
    }
}

impl ClientConfigBuilder {
    /// Override the service base URL (tests point this at a mock server)
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a per-request timeout
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the `top_k` used when a query does not carry its own
    #[must_use]
    pub fn default_top_k(mut self, top_k: u32) -> Self {
        self.default_top_k = top_k;
        self
    }

    /// Validate and build the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse as an absolute URL
    /// or if `default_top_k` is zero.
    pub fn build(self) -> Result<ClientConfig> {
        Url::parse(&self.base_url)
            .map_err(|e| anyhow!("Invalid base URL '{}': {e}", self.base_url))?;

        if self.default_top_k == 0 {
            return Err(anyhow!("default_top_k must be at least 1"));
        }

        Ok(ClientConfig {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            request_timeout: self.request_timeout,
            default_top_k: self.default_top_k,
        })
    }
}
