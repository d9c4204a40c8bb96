//! Deterministic text rendering of `UiState`
//!
//! The contract: render the error message iff one is set, the result list
//! iff it is non-empty, and the submit control disabled with a busy label
//! iff a request is in flight.

use std::fmt::{self, Write};

use super::state::UiState;

/// Submit-control label while a request is in flight
pub const LABEL_LOADING: &str = "Searching...";
/// Submit-control label when idle or settled
pub const LABEL_IDLE: &str = "Search";

/// Render one frame of the view into any writer
///
/// # Errors
///
/// Propagates formatting errors from the writer.
pub fn render(state: &UiState, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "query: {}", state.query)?;
    writeln!(
        out,
        "options: [{}] soundex  [{}] spell correction",
        mark(state.options.use_soundex),
        mark(state.options.use_spell_correction)
    )?;

    let label = if state.loading { LABEL_LOADING } else { LABEL_IDLE };
    if state.loading {
        writeln!(out, "submit: ({label}) [disabled]")?;
    } else {
        writeln!(out, "submit: ({label})")?;
    }

    if let Some(error) = &state.error {
        writeln!(out, "error: {error}")?;
    }

    if !state.results.is_empty() {
        for (rank, result) in state.results.iter().enumerate() {
            writeln!(
                out,
                "{}. {}  (score {:.4})",
                rank + 1,
                result.document,
                result.score
            )?;
            writeln!(out, "   {}", result.snippet)?;
        }
    }

    Ok(())
}

/// Render one frame into a fresh string
#[must_use]
pub fn render_to_string(state: &UiState) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = render(state, &mut out);
    out
}

fn mark(on: bool) -> char {
    if on { 'x' } else { ' ' }
}
