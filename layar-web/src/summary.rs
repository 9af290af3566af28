//! Best-effort Wikipedia summary lookup for films without a written
//! synopsis. Never required for core rendering; every failure collapses to
//! the fixed unavailable message.

use std::time::Duration;

use serde::Deserialize;

use crate::state::AppState;

pub const UNAVAILABLE: &str =
    "The synopsis could not be loaded from Wikipedia. Try again later.";

#[derive(Debug, Clone)]
pub struct WikiSummary {
    pub extract: String,
    /// Attribution link to the source article.
    pub source_href: String,
}

#[derive(Deserialize)]
struct SummaryResponse {
    extract: Option<String>,
}

/// Article slug for a film title: whitespace becomes underscores.
pub fn title_slug(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Fetches the summary extract for a title. Any transport, status, or parse
/// failure is logged and yields `None`.
pub async fn fetch_summary(state: &AppState, title: &str) -> Option<WikiSummary> {
    let slug = title_slug(title);
    if slug.is_empty() {
        return None;
    }

    let config = &state.config.summary;
    let url = format!("{}/{}", config.api_base.trim_end_matches('/'), slug);

    let response = state
        .http
        .get(&url)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .send()
        .await
        .and_then(|res| res.error_for_status());

    let response = match response {
        Ok(res) => res,
        Err(err) => {
            tracing::warn!(error = %err, %slug, "wikipedia summary fetch failed");
            return None;
        }
    };

    match response.json::<SummaryResponse>().await {
        Ok(SummaryResponse {
            extract: Some(extract),
        }) => Some(WikiSummary {
            extract,
            source_href: format!("{}/{}", config.page_base.trim_end_matches('/'), slug),
        }),
        Ok(SummaryResponse { extract: None }) => {
            tracing::debug!(%slug, "wikipedia summary has no extract");
            None
        }
        Err(err) => {
            tracing::warn!(error = %err, %slug, "wikipedia summary parse failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_replace_whitespace_with_underscores() {
        assert_eq!(title_slug("Laskar Pelangi"), "Laskar_Pelangi");
        assert_eq!(title_slug("  Habibie  &  Ainun "), "Habibie_&_Ainun");
        assert_eq!(title_slug("   "), "");
    }

    #[test]
    fn summary_response_parses_with_and_without_extract() {
        let with: SummaryResponse =
            serde_json::from_str(r#"{"extract": "A film.", "title": "Foo"}"#).unwrap();
        assert_eq!(with.extract.as_deref(), Some("A film."));

        let without: SummaryResponse = serde_json::from_str(r#"{"type": "not_found"}"#).unwrap();
        assert!(without.extract.is_none());
    }
}
