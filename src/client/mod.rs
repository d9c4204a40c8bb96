//! Typed HTTP client for the external search service
//!
//! The service owns all information-retrieval logic (tokenization, indexing,
//! soundex, spell correction, scoring); this module only builds requests,
//! checks response status, and decodes JSON payloads into typed results.
//!
//! Every operation performs exactly one network round trip. There is no
//! caching, no deduplication of in-flight requests, and no retry; retries,
//! if any, belong to the caller.

mod errors;
mod types;

pub use errors::{ClientError, ClientResult};
pub use types::{DEFAULT_TOP_K, SearchOptions, SearchQuery, SearchResult};

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use types::{CorpusListing, DocumentPayload, RebuildPayload, SearchEnvelope};

use crate::config::ClientConfig;

/// Client for the document-search HTTP service
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    /// Build a client from validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url().trim_end_matches('/').to_string(),
        })
    }

    /// List the identifiers of every document in the corpus
    ///
    /// # Errors
    ///
    /// `ClientError::Status`/`Transport` on a failed round trip,
    /// `ClientError::Parse` if the payload is not `{ "files": [...] }`.
    pub async fn list_corpus_files(&self) -> ClientResult<Vec<String>> {
        let url = format!("{}/corpus", self.base_url);
        debug!(%url, "listing corpus files");

        let resp = self.http.get(url).send().await?;
        let listing: CorpusListing = decode("corpus", resp).await?;

        debug!(count = listing.files.len(), "corpus listing received");
        Ok(listing.files)
    }

    /// Fetch the full text of one corpus document
    ///
    /// `file_name` is not validated locally; an unknown name comes back from
    /// the server as a non-success status.
    ///
    /// # Errors
    ///
    /// `ClientError::Status`/`Transport` on a failed round trip (including
    /// not-found), `ClientError::Parse` on a malformed payload.
    pub async fn get_document_content(&self, file_name: &str) -> ClientResult<String> {
        let url = format!(
            "{}/corpus/{}",
            self.base_url,
            urlencoding::encode(file_name)
        );
        debug!(%file_name, "fetching document content");

        let resp = self.http.get(url).send().await?;
        let payload: DocumentPayload = decode("document", resp).await?;

        Ok(payload.content)
    }

    /// Run a search and return the service's ranked results
    ///
    /// Serializes the query text, `top_k`, and the option flags as request
    /// parameters; the flags are appended only when enabled, which is how
    /// the service distinguishes them from its defaults. Result order is
    /// preserved exactly as returned.
    ///
    /// # Errors
    ///
    /// `ClientError::Status`/`Transport` on a failed round trip,
    /// `ClientError::Parse` if any result field is missing or mistyped.
    pub async fn search(&self, query: &SearchQuery) -> ClientResult<Vec<SearchResult>> {
        let mut params: Vec<(&str, String)> = vec![
            ("query", query.text.clone()),
            ("top_k", query.top_k.to_string()),
        ];
        if query.options.use_soundex {
            params.push(("use_soundex", "true".to_string()));
        }
        if query.options.use_spell_correction {
            params.push(("use_spellcorrection", "true".to_string()));
        }

        info!(query = %query.text, top_k = query.top_k, "searching corpus");

        let url = format!("{}/search", self.base_url);
        let resp = self.http.post(url).query(&params).send().await?;
        let envelope: SearchEnvelope = decode("search", resp).await?;

        info!(
            query = %query.text,
            results = envelope.results.len(),
            "search completed"
        );
        Ok(envelope.results)
    }

    /// Ask the service to rebuild its index
    ///
    /// The rebuild itself runs server-side; this is only the trigger.
    /// Returns the service's confirmation message.
    ///
    /// # Errors
    ///
    /// `ClientError::Status`/`Transport` on a failed round trip,
    /// `ClientError::Parse` on a malformed payload.
    pub async fn rebuild_index(&self) -> ClientResult<String> {
        let url = format!("{}/rebuild-index", self.base_url);
        info!("requesting index rebuild");

        let resp = self.http.post(url).send().await?;
        let payload: RebuildPayload = decode("rebuild-index", resp).await?;

        Ok(payload.message)
    }
}

/// Check response status, then decode the JSON body.
///
/// A non-success status is a hard failure regardless of any body the server
/// attached to it; the body is only inspected on success.
async fn decode<T: DeserializeOwned>(
    endpoint: &'static str,
    resp: reqwest::Response,
) -> ClientResult<T> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ClientError::Status {
            endpoint,
            status: status.as_u16(),
        });
    }
    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}
