use layar_core::normalize::normalize;
use layar_core::{Cinema, DataError};

use crate::state::AppState;

/// Reads and normalizes the data document. Called once per page request;
/// the returned list is the canonical list for that request's lifetime.
pub async fn load_cinemas(state: &AppState) -> Result<Vec<Cinema>, DataError> {
    let bytes = tokio::fs::read(&state.config.data.path).await?;
    let raw: serde_json::Value = serde_json::from_slice(&bytes)?;
    Ok(normalize(&raw, &state.brands))
}

/// User-facing wording per failure class; the diagnostic cause goes to the
/// log, never to the page.
pub fn failure_message(err: &DataError) -> &'static str {
    match err {
        DataError::Io(_) => "Failed to load the cinema data document.",
        DataError::Json(_) => "The cinema data document could not be parsed.",
    }
}
