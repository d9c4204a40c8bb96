//! Transient view state for one search session

use serde::{Deserialize, Serialize};

use crate::client::{SearchOptions, SearchResult};

/// Everything the view needs to draw one frame.
///
/// Created at mount with defaults and owned exclusively by the controller
/// for the lifetime of the view; never persisted. After a request settles,
/// exactly one of these holds: an error message is set with no results, or
/// results are present with no error, or both are empty (nothing searched
/// yet, or an empty result set). `loading` is true only strictly between
/// request dispatch and its resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    /// Current query text as typed, untrimmed
    pub query: String,
    /// Option flags applied to the next submitted query
    pub options: SearchOptions,
    /// A request is in flight
    pub loading: bool,
    /// User-facing message from the last failed request
    pub error: Option<String>,
    /// Results of the last successful request, in service order
    pub results: Vec<SearchResult>,
}
