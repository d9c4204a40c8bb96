//! Search interaction controller
//!
//! Owns the single `UiState` and turns user actions into state transitions:
//! idle → loading → settled (success or error), re-armed by every new
//! submit. The loading flag doubles as the only concurrency control: while
//! it is set, `begin_submit` refuses, so at most one request is ever in
//! flight per controller. There is no queueing and no cancellation.

mod render;
mod state;

pub use render::{LABEL_IDLE, LABEL_LOADING, render, render_to_string};
pub use state::UiState;

use tracing::{debug, warn};

use crate::client::{ClientResult, SearchClient, SearchQuery, SearchResult};

/// Message shown for any failed search, transport and parse alike
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Please try again.";

/// State machine driving one search view
#[derive(Debug)]
pub struct SearchController {
    state: UiState,
    top_k: u32,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchController {
    /// Controller in its initial idle state, with the default `top_k`
    #[must_use]
    pub fn new() -> Self {
        Self::with_top_k(crate::client::DEFAULT_TOP_K)
    }

    /// Controller requesting `top_k` results per search
    #[must_use]
    pub fn with_top_k(top_k: u32) -> Self {
        Self {
            state: UiState::default(),
            top_k,
        }
    }

    /// Current view state, for rendering
    #[must_use]
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// The submit control is unavailable while a request is in flight
    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        !self.state.loading
    }

    /// Replace the query text. Legal in every state; text input stays
    /// responsive while a request is in flight.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.state.query = text.into();
    }

    /// Flip the soundex flag. Only affects the next submitted query;
    /// loading, error, and results are untouched.
    pub fn toggle_soundex(&mut self) {
        self.state.options.use_soundex = !self.state.options.use_soundex;
    }

    /// Flip the spell-correction flag. Only affects the next submitted
    /// query; loading, error, and results are untouched.
    pub fn toggle_spell_correction(&mut self) {
        self.state.options.use_spell_correction = !self.state.options.use_spell_correction;
    }

    /// Accept a submit action.
    ///
    /// Returns the query to issue when the transition to loading happened.
    /// Returns None, with the state fully unchanged, when the submit
    /// control is disabled (request in flight) or the query text is blank.
    /// A Some return clears any prior error and sets the loading flag; the
    /// caller must deliver the request's outcome to [`resolve`] to settle
    /// the cycle.
    ///
    /// [`resolve`]: SearchController::resolve
    pub fn begin_submit(&mut self) -> Option<SearchQuery> {
        if self.state.loading {
            debug!("submit ignored: request already in flight");
            return None;
        }

        let text = self.state.query.trim();
        if text.is_empty() {
            debug!("submit ignored: blank query");
            return None;
        }

        self.state.loading = true;
        self.state.error = None;

        Some(SearchQuery {
            text: text.to_string(),
            top_k: self.top_k,
            options: self.state.options,
        })
    }

    /// Settle the in-flight request with its outcome.
    ///
    /// Success stores the service's results verbatim, in service order.
    /// Failure discards any prior results and sets the one user-facing
    /// message; transport and parse failures are not distinguished.
    pub fn resolve(&mut self, outcome: ClientResult<Vec<SearchResult>>) {
        self.state.loading = false;
        match outcome {
            Ok(results) => {
                debug!(results = results.len(), "search settled with results");
                self.state.results = results;
                self.state.error = None;
            }
            Err(e) => {
                warn!(error = %e, "search settled with failure");
                self.state.error = Some(SEARCH_FAILED_MESSAGE.to_string());
                self.state.results.clear();
            }
        }
    }

    /// Full submit cycle: begin, await the service, settle.
    ///
    /// A no-op when the submit is refused. The suspension point is inside
    /// the service call, so other interactions (toggles, text edits) stay
    /// responsive between frames.
    pub async fn run_submit(&mut self, client: &SearchClient) {
        if let Some(query) = self.begin_submit() {
            let outcome = client.search(&query).await;
            self.resolve(outcome);
        }
    }
}
