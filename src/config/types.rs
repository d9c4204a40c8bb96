//! Core configuration types for the search client

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::builder::ClientConfigBuilder;
use crate::client::DEFAULT_TOP_K;

/// Base URL of the search service's HTTP API
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Validated configuration for a `SearchClient`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// **INVARIANT:** a parseable absolute URL with no trailing slash
    /// (normalized in the builder).
    pub(crate) base_url: String,

    /// Per-request timeout. None means unbounded: the service does not
    /// specify one, so only the transport may impose its own, and a
    /// transport timeout surfaces as a transport failure.
    pub(crate) request_timeout: Option<Duration>,

    /// `top_k` used when a query does not carry its own
    pub(crate) default_top_k: u32,
}

impl ClientConfig {
    /// Start building a configuration
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    #[must_use]
    pub fn default_top_k(&self) -> u32 {
        self.default_top_k
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
            default_top_k: DEFAULT_TOP_K,
        }
    }
}
