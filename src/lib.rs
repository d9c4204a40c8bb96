pub mod client;
pub mod config;
pub mod controller;

pub use client::{
    ClientError, ClientResult, DEFAULT_TOP_K, SearchClient, SearchOptions, SearchQuery,
    SearchResult,
};
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL};
pub use controller::{
    LABEL_IDLE, LABEL_LOADING, SEARCH_FAILED_MESSAGE, SearchController, UiState, render,
    render_to_string,
};
