//! HTTP contract tests for `SearchClient`
//!
//! Each endpoint is exercised against a mock service: success payloads, the
//! non-success-status-is-transport rule, malformed-payload-is-parse rule,
//! and the exact serialization of search parameters.

mod common;

use common::{ROUTER_PAYLOAD, client_for, mock_service, unreachable_client};
use corposeek::{ClientError, SearchOptions, SearchQuery};
use mockito::Matcher;

// -- corpus listing ----------------------------------------------------------

#[tokio::test]
async fn list_corpus_files_returns_identifiers() {
    let mut server = mock_service().await;
    let mock = server
        .mock("GET", "/corpus")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"files": ["alpha", "beta", "gamma"]}"#)
        .create_async()
        .await;

    let files = client_for(&server).list_corpus_files().await.unwrap();

    assert_eq!(files, vec!["alpha", "beta", "gamma"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn list_corpus_files_maps_server_error_to_transport() {
    let mut server = mock_service().await;
    server
        .mock("GET", "/corpus")
        .with_status(500)
        .create_async()
        .await;

    let err = client_for(&server).list_corpus_files().await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn list_corpus_files_maps_bad_payload_to_parse() {
    let mut server = mock_service().await;
    server
        .mock("GET", "/corpus")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"files": "not-a-list"}"#)
        .create_async()
        .await;

    let err = client_for(&server).list_corpus_files().await.unwrap_err();

    assert!(err.is_parse());
    assert!(matches!(err, ClientError::Parse(_)));
}

// -- document fetch ----------------------------------------------------------

#[tokio::test]
async fn get_document_content_returns_text() {
    let mut server = mock_service().await;
    let mock = server
        .mock("GET", "/corpus/alpha")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"content": "Alpha is the first document."}"#)
        .create_async()
        .await;

    let content = client_for(&server)
        .get_document_content("alpha")
        .await
        .unwrap();

    assert_eq!(content, "Alpha is the first document.");
    mock.assert_async().await;
}

#[tokio::test]
async fn get_document_content_percent_encodes_the_name() {
    let mut server = mock_service().await;
    let mock = server
        .mock("GET", "/corpus/two%20words")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"content": "spaced"}"#)
        .create_async()
        .await;

    let content = client_for(&server)
        .get_document_content("two words")
        .await
        .unwrap();

    assert_eq!(content, "spaced");
    mock.assert_async().await;
}

#[tokio::test]
async fn get_document_content_treats_not_found_as_transport() {
    let mut server = mock_service().await;
    server
        .mock("GET", "/corpus/missing")
        .with_status(404)
        .create_async()
        .await;

    let err = client_for(&server)
        .get_document_content("missing")
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.status(), Some(404));
}

// -- search ------------------------------------------------------------------

#[tokio::test]
async fn search_sends_query_and_top_k_and_preserves_result_order() {
    let mut server = mock_service().await;
    let mock = server
        .mock("POST", "/search")
        .match_query(Matcher::Exact("query=router&top_k=5".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ROUTER_PAYLOAD)
        .create_async()
        .await;

    let results = client_for(&server)
        .search(&SearchQuery::new("router"))
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].document, "doc1");
    assert_eq!(results[0].score, 0.92);
    assert_eq!(results[1].document, "doc2");
    assert_eq!(results[1].score, 0.81);
    mock.assert_async().await;
}

#[tokio::test]
async fn search_appends_only_the_enabled_option_flags() {
    let mut server = mock_service().await;
    // Exact query-string match: use_spellcorrection must be absent when the
    // flag is off, otherwise this mock never matches and the assert fails.
    let mock = server
        .mock("POST", "/search")
        .match_query(Matcher::Exact(
            "query=fone&top_k=5&use_soundex=true".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": []}"#)
        .create_async()
        .await;

    let query = SearchQuery::new("fone").with_options(SearchOptions {
        use_soundex: true,
        use_spell_correction: false,
    });
    let results = client_for(&server).search(&query).await.unwrap();

    assert!(results.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn search_sends_both_flags_when_both_enabled() {
    let mut server = mock_service().await;
    let mock = server
        .mock("POST", "/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "fone".into()),
            Matcher::UrlEncoded("use_soundex".into(), "true".into()),
            Matcher::UrlEncoded("use_spellcorrection".into(), "true".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": []}"#)
        .create_async()
        .await;

    let query = SearchQuery::new("fone").with_options(SearchOptions {
        use_soundex: true,
        use_spell_correction: true,
    });
    client_for(&server).search(&query).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn search_maps_server_error_to_transport() {
    let mut server = mock_service().await;
    server
        .mock("POST", "/search")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(r#"{"error": "Search failed: index unavailable"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .search(&SearchQuery::new("router"))
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn search_maps_missing_fields_to_parse() {
    let mut server = mock_service().await;
    server
        .mock("POST", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": [{"document": "doc1", "snippet": "no score"}]}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .search(&SearchQuery::new("router"))
        .await
        .unwrap_err();

    assert!(err.is_parse());
}

#[tokio::test]
async fn search_maps_connection_failure_to_transport() {
    let err = unreachable_client()
        .search(&SearchQuery::new("router"))
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert!(err.status().is_none());
}

// -- index rebuild -----------------------------------------------------------

#[tokio::test]
async fn rebuild_index_returns_confirmation_message() {
    let mut server = mock_service().await;
    let mock = server
        .mock("POST", "/rebuild-index")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "Index rebuilt successfully"}"#)
        .create_async()
        .await;

    let message = client_for(&server).rebuild_index().await.unwrap();

    assert_eq!(message, "Index rebuilt successfully");
    mock.assert_async().await;
}

#[tokio::test]
async fn rebuild_index_maps_server_error_to_transport() {
    let mut server = mock_service().await;
    server
        .mock("POST", "/rebuild-index")
        .with_status(500)
        .create_async()
        .await;

    let err = client_for(&server).rebuild_index().await.unwrap_err();

    assert!(err.is_transport());
}
