//! Client configuration
//!
//! Provides the `ClientConfig` struct and its fluent builder. The base URL
//! is fixed in the shipped binary; overriding it exists for tests that stand
//! up a mock service.

pub mod builder;
pub mod types;

pub use builder::ClientConfigBuilder;
pub use types::{ClientConfig, DEFAULT_BASE_URL};
