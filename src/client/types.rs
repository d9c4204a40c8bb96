//! Data structures for queries and results
//!
//! `SearchResult` mirrors the service's wire shape exactly; the envelope
//! structs exist only to peel the outer JSON object off each payload.

use serde::{Deserialize, Serialize};

/// Number of results requested when the caller does not say otherwise
pub const DEFAULT_TOP_K: u32 = 5;

/// Option flags forwarded verbatim to the search service.
///
/// Both algorithms run server-side; these flags only alter the request
/// parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Phonetic matching via soundex codes
    pub use_soundex: bool,
    /// Query-term spelling correction
    pub use_spell_correction: bool,
}

/// A fully-specified search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Query text, already trimmed and non-empty
    pub text: String,
    /// Maximum number of results to request
    pub top_k: u32,
    /// Service-side option flags
    pub options: SearchOptions,
}

impl SearchQuery {
    /// Create a query with the default `top_k` and no options enabled
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            top_k: DEFAULT_TOP_K,
            options: SearchOptions::default(),
        }
    }

    /// Replace the option flags
    #[must_use]
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }
}

/// A single ranked search result
///
/// Scores are whatever the service computed: unbounded, higher is more
/// relevant, no normalization guaranteed. Order within a response is the
/// service's ranking and is never re-sorted client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Document identifier or title
    pub document: String,
    /// Relevance score as computed by the service
    pub score: f64,
    /// Short excerpt giving the match context
    pub snippet: String,
}

/// Payload of `GET /corpus`
#[derive(Debug, Deserialize)]
pub(crate) struct CorpusListing {
    pub files: Vec<String>,
}

/// Payload of `GET /corpus/{file_name}`
#[derive(Debug, Deserialize)]
pub(crate) struct DocumentPayload {
    pub content: String,
}

/// Payload of `POST /search`
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    pub results: Vec<SearchResult>,
}

/// Payload of `POST /rebuild-index`
#[derive(Debug, Deserialize)]
pub(crate) struct RebuildPayload {
    pub message: String,
}
