use crate::domain::{Cinema, Movie};
use crate::view::{age_badge, non_blank, AgeBadge, UNNAMED_CINEMA, UNTITLED};

/// The cinema-detail page: header, map, and one card per movie.
#[derive(Debug, Clone, PartialEq)]
pub struct CinemaDetailView {
    pub name: String,
    /// Address and city joined with a separator, present pieces only.
    pub address_line: String,
    /// Rating, ticket price, and studio count summary line.
    pub meta_line: String,
    pub image_url: Option<String>,
    pub map: MapView,
    /// Subtitle for the schedule section.
    pub schedule_note: String,
    pub movies: Vec<MovieCard>,
    /// Present exactly when the movie list is empty.
    pub empty_message: Option<&'static str>,
}

/// Embed takes precedence over the external link; both absent renders a
/// placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapView {
    Embed(String),
    Link(String),
    Unavailable,
}

impl MapView {
    pub const PLACEHOLDER: &'static str = "Location is not available yet.";
}

/// One movie card on the schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCard {
    pub title: String,
    pub age: AgeBadge,
    pub poster_url: Option<String>,
    /// Genres, duration, and director joined into one line.
    pub meta_line: String,
    /// Genre tags followed by screen-type tags.
    pub tags: Vec<String>,
    /// Cast list, or the synopsis-pointer fallback.
    pub description: String,
    /// Movie-page link id, present only when the movie carries a synopsis
    /// link; empty id means the record had a link but no id.
    pub synopsis_link_id: Option<String>,
    pub map_link: Option<String>,
}

pub fn build_cinema_detail(cinema: &Cinema) -> CinemaDetailView {
    let name = cinema
        .name
        .clone()
        .unwrap_or_else(|| UNNAMED_CINEMA.to_string());

    let address_line = join_present(
        &[cinema.address.as_deref(), cinema.city.as_deref()],
        " • ",
    );

    let meta_line = join_present(
        &[
            non_blank(cinema.rating.as_deref())
                .map(|r| format!("Rating: {r}"))
                .as_deref(),
            non_blank(cinema.ticket_price.as_deref()),
            non_blank(cinema.total_studios.as_deref())
                .map(|s| format!("{s} studios"))
                .as_deref(),
        ],
        " • ",
    );

    let map = match (
        non_blank(cinema.map_embed.as_deref()),
        non_blank(cinema.map_link.as_deref()),
    ) {
        (Some(embed), _) => MapView::Embed(embed.to_string()),
        (None, Some(link)) => MapView::Link(link.to_string()),
        (None, None) => MapView::Unavailable,
    };

    let (schedule_note, empty_message) = if cinema.movies.is_empty() {
        (
            "No films are registered for this cinema in the data document.".to_string(),
            Some("Film data is not available."),
        )
    } else {
        (
            format!(
                "Films showing at {} in {}. Sourced from a static dataset, not a real-time schedule.",
                name,
                cinema.city.as_deref().unwrap_or("-")
            ),
            None,
        )
    };

    CinemaDetailView {
        name,
        address_line,
        meta_line,
        image_url: cinema.image_url.clone(),
        map,
        schedule_note,
        movies: cinema
            .movies
            .iter()
            .map(|m| movie_card(m, cinema.map_link.as_deref()))
            .collect(),
        empty_message,
    }
}

fn movie_card(movie: &Movie, cinema_map_link: Option<&str>) -> MovieCard {
    let mut meta = Vec::new();
    if !movie.genres.is_empty() {
        meta.push(movie.genres.join(", "));
    }
    if let Some(duration) = non_blank(movie.duration_minutes.as_deref()) {
        meta.push(format!("{duration} minutes"));
    }
    if let Some(director) = non_blank(movie.director.as_deref()) {
        meta.push(format!("Director: {director}"));
    }

    let mut tags = movie.genres.clone();
    tags.extend(movie.screen_types.iter().cloned());

    let description = match non_blank(movie.casts.as_deref()) {
        Some(casts) => format!("Cast: {casts}"),
        None => "The full synopsis is available through the synopsis link, if present.".to_string(),
    };

    MovieCard {
        title: movie.title.clone().unwrap_or_else(|| UNTITLED.to_string()),
        age: age_badge(movie.age_rating.as_deref()),
        poster_url: movie.poster_url.clone(),
        meta_line: meta.join(" • "),
        tags,
        description,
        synopsis_link_id: non_blank(movie.sinopsis_url.as_deref())
            .map(|_| movie.id.clone().unwrap_or_default()),
        map_link: cinema_map_link.map(str::to_string),
    }
}

fn join_present(pieces: &[Option<&str>], separator: &str) -> String {
    pieces
        .iter()
        .filter_map(|p| p.map(str::trim).filter(|s| !s.is_empty()))
        .collect::<Vec<_>>()
        .join(separator)
}
