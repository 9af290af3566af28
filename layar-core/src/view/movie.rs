use crate::domain::Movie;
use crate::video::extract_video_id;
use crate::view::{age_badge, non_blank, AgeBadge, UNTITLED};

/// The movie-detail page: metadata block, trailer slot, synopsis, and the
/// aggregate screening sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetailView {
    pub title: String,
    pub director: String,
    pub casts: String,
    pub duration: String,
    pub genres_line: String,
    pub age: AgeBadge,
    pub poster_url: Option<String>,
    pub trailer: TrailerView,
    pub synopsis: SynopsisView,
    /// Names every cinema currently screening the movie, plus the optional
    /// play-date range.
    pub screening_line: String,
}

/// Embedded player when a video id is extractable, a plain external link
/// when the URL exists but no id does, a placeholder otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailerView {
    Embed { video_id: String },
    External { url: String },
    Unavailable,
}

impl TrailerView {
    pub const PLACEHOLDER: &'static str = "A trailer link is not available for this film.";
    pub const EXTERNAL_LABEL: &'static str = "Open the trailer / synopsis on an external page.";
}

/// One paragraph per non-blank line group, or the missing-field placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynopsisView {
    Paragraphs(Vec<String>),
    Missing,
}

impl SynopsisView {
    pub const PLACEHOLDER: &'static str =
        "A written synopsis is not available for this film yet.";
}

pub fn build_movie_detail(movie: &Movie, cinema_names: &[String]) -> MovieDetailView {
    let trailer = match non_blank(movie.sinopsis_url.as_deref()) {
        Some(url) => match extract_video_id(url) {
            Some(video_id) => TrailerView::Embed { video_id },
            None => TrailerView::External {
                url: url.to_string(),
            },
        },
        None => TrailerView::Unavailable,
    };

    let synopsis = match non_blank(movie.synopsis_text.as_deref()) {
        Some(text) => SynopsisView::Paragraphs(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        None => SynopsisView::Missing,
    };

    MovieDetailView {
        title: movie.title.clone().unwrap_or_else(|| UNTITLED.to_string()),
        director: dash_fallback(movie.director.as_deref()),
        casts: dash_fallback(movie.casts.as_deref()),
        duration: non_blank(movie.duration_minutes.as_deref())
            .map(|d| format!("{d} minutes"))
            .unwrap_or_else(|| "-".to_string()),
        genres_line: if movie.genres.is_empty() {
            "-".to_string()
        } else {
            movie.genres.join(", ")
        },
        age: age_badge(movie.age_rating.as_deref()),
        poster_url: movie.poster_url.clone(),
        trailer,
        synopsis,
        screening_line: screening_line(movie, cinema_names),
    }
}

fn screening_line(movie: &Movie, cinema_names: &[String]) -> String {
    let names = cinema_names.join(", ");
    let start = non_blank(movie.play_start.as_deref());
    let end = non_blank(movie.play_end.as_deref());

    if start.is_some() || end.is_some() {
        let until = end.map(|e| format!(" until {e}")).unwrap_or_default();
        format!(
            "This film is showing at: {}. Running since {}{} (from a static dataset, not a real-time schedule).",
            names,
            start.unwrap_or("?"),
            until
        )
    } else {
        format!(
            "This film is listed as showing at: {}. Exact schedules follow each cinema's official information.",
            names
        )
    }
}

fn dash_fallback(value: Option<&str>) -> String {
    non_blank(value).unwrap_or("-").to_string()
}
