//! Test utilities and helper functions for the corposeek test suite

use corposeek::{ClientConfig, SearchClient};
use mockito::ServerGuard;

/// Two-result payload used by the baseline search scenario
#[allow(dead_code)]
pub const ROUTER_PAYLOAD: &str = r#"{
    "results": [
        {"document": "doc1", "score": 0.92, "snippet": "...router..."},
        {"document": "doc2", "score": 0.81, "snippet": "...router..."}
    ]
}"#;

/// Start a mock search service
#[allow(dead_code)]
pub async fn mock_service() -> ServerGuard {
    mockito::Server::new_async().await
}

/// Build a `SearchClient` pointed at a mock service
#[allow(dead_code)]
pub fn client_for(server: &ServerGuard) -> SearchClient {
    let config = ClientConfig::builder()
        .base_url(server.url())
        .build()
        .expect("mock server URL should be valid");
    SearchClient::new(&config).expect("client construction should succeed")
}

/// Build a `SearchClient` pointed at a port nothing listens on
#[allow(dead_code)]
pub fn unreachable_client() -> SearchClient {
    let config = ClientConfig::builder()
        .base_url("http://127.0.0.1:1/api")
        .build()
        .expect("URL should be valid");
    SearchClient::new(&config).expect("client construction should succeed")
}
