use serde::{Deserialize, Serialize};

use crate::serde_util;

/// One theater location from the data document.
///
/// Every field except `movies` and the derived `brand` is optional; the
/// source document is duck-typed and records routinely omit fields. Fallback
/// display strings live in [`crate::view`], not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cinema {
    /// Opaque join key used by detail links; unique across the canonical list.
    #[serde(deserialize_with = "serde_util::opt_stringish")]
    pub id: Option<String>,
    #[serde(deserialize_with = "serde_util::opt_stringish")]
    pub name: Option<String>,
    #[serde(deserialize_with = "serde_util::opt_stringish")]
    pub city: Option<String>,
    #[serde(deserialize_with = "serde_util::opt_stringish")]
    pub address: Option<String>,
    #[serde(deserialize_with = "serde_util::opt_stringish")]
    pub rating: Option<String>,
    #[serde(deserialize_with = "serde_util::opt_stringish")]
    pub ticket_price: Option<String>,
    #[serde(deserialize_with = "serde_util::opt_stringish")]
    pub total_studios: Option<String>,
    #[serde(deserialize_with = "serde_util::opt_stringish")]
    pub image_url: Option<String>,
    /// Embeddable map reference; takes precedence over `map_link`.
    #[serde(deserialize_with = "serde_util::opt_stringish")]
    pub map_embed: Option<String>,
    #[serde(deserialize_with = "serde_util::opt_stringish")]
    pub map_link: Option<String>,
    /// Display order of the source document, not semantically significant.
    pub movies: Vec<Movie>,
    /// Derived from `name` during normalization, never read from the payload.
    #[serde(skip_deserializing)]
    pub brand: String,
}

/// One film, nested inside a cinema's movie list. The same movie may appear
/// under multiple cinemas; identity is `id` equality across records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Movie {
    #[serde(deserialize_with = "serde_util::opt_stringish")]
    pub id: Option<String>,
    #[serde(deserialize_with = "serde_util::opt_stringish")]
    pub title: Option<String>,
    #[serde(deserialize_with = "serde_util::opt_stringish")]
    pub director: Option<String>,
    #[serde(deserialize_with = "serde_util::opt_stringish")]
    pub casts: Option<String>,
    #[serde(deserialize_with = "serde_util::opt_stringish")]
    pub duration_minutes: Option<String>,
    #[serde(deserialize_with = "serde_util::opt_stringish")]
    pub age_rating: Option<String>,
    #[serde(deserialize_with = "serde_util::opt_stringish")]
    pub year: Option<String>,
    pub genres: Vec<String>,
    pub screen_types: Vec<String>,
    pub poster_url: Option<String>,
    /// Falls back to `poster_url`, then to a placeholder, at render time.
    pub hero_bg_url: Option<String>,
    /// Trailer or external synopsis link; a trailer iff a video id can be
    /// extracted from it (see [`crate::video`]).
    pub sinopsis_url: Option<String>,
    /// Pre-formatted multi-paragraph text, paragraph breaks on blank lines.
    pub synopsis_text: Option<String>,
    /// 0-5, rounded to the nearest whole star for display.
    #[serde(deserialize_with = "serde_util::opt_scoreish")]
    pub rating_score: Option<f64>,
    /// Display-only date strings, never validated or filtered on.
    #[serde(deserialize_with = "serde_util::opt_stringish")]
    pub play_start: Option<String>,
    #[serde(deserialize_with = "serde_util::opt_stringish")]
    pub play_end: Option<String>,
}
