//! Landing-page extras: the hero slideshow and the now-showing strip. Slide
//! selection is pure and deterministic; timer-driven rotation and the
//! auto-scroll animation are presentation chrome outside this crate.

use crate::domain::Cinema;
use crate::view::{non_blank, star_row, UNTITLED};

/// Movies shown on the now-showing strip, matching the original layout.
pub const NOW_SHOWING_LIMIT: usize = 12;

/// One hero slide, built from a cinema × movie pair that carries a usable
/// background image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroSlide {
    pub title: String,
    /// Parenthesized production year, with the fixed fallback.
    pub year_label: String,
    pub stars: String,
    pub description: String,
    pub background_url: String,
}

/// One small card on the now-showing strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripCard {
    /// Movie-page link target; `None` suppresses the link.
    pub movie_id: Option<String>,
    pub title: String,
    pub city: String,
    pub poster_url: Option<String>,
}

/// Every cinema × movie pair with a hero or poster image, in canonical
/// order. Hero background falls back from `hero_bg_url` to `poster_url`.
pub fn build_hero_slides(cinemas: &[Cinema]) -> Vec<HeroSlide> {
    let mut slides = Vec::new();
    for cinema in cinemas {
        for movie in &cinema.movies {
            let background = non_blank(movie.hero_bg_url.as_deref())
                .or_else(|| non_blank(movie.poster_url.as_deref()));
            let Some(background) = background else {
                continue;
            };

            let description = match first_paragraph(movie.synopsis_text.as_deref()) {
                Some(p) => p.to_string(),
                None => {
                    let genres = if movie.genres.is_empty() {
                        "various genres".to_string()
                    } else {
                        movie.genres.join(", ")
                    };
                    let screens = if movie.screen_types.is_empty() {
                        "standard 2D".to_string()
                    } else {
                        movie.screen_types.join(", ")
                    };
                    format!(
                        "Now playing at {} in {}. Genre: {}, screen type: {}.",
                        cinema.name.as_deref().unwrap_or("your favorite cinema"),
                        cinema.city.as_deref().unwrap_or("North Sumatera"),
                        genres,
                        screens
                    )
                }
            };

            slides.push(HeroSlide {
                title: movie
                    .title
                    .clone()
                    .unwrap_or_else(|| "Now Showing".to_string()),
                year_label: non_blank(movie.year.as_deref())
                    .map(|y| format!("({y})"))
                    .unwrap_or_else(|| "(2025)".to_string()),
                stars: star_row(movie.rating_score),
                description,
                background_url: background.to_string(),
            });
        }
    }
    slides
}

/// The first [`NOW_SHOWING_LIMIT`] cinema × movie pairs in canonical order.
pub fn build_now_showing(cinemas: &[Cinema]) -> Vec<StripCard> {
    cinemas
        .iter()
        .flat_map(|cinema| cinema.movies.iter().map(move |movie| (cinema, movie)))
        .take(NOW_SHOWING_LIMIT)
        .map(|(cinema, movie)| StripCard {
            movie_id: non_blank(movie.id.as_deref()).map(str::to_string),
            title: movie.title.clone().unwrap_or_else(|| UNTITLED.to_string()),
            city: cinema.city.clone().unwrap_or_default(),
            poster_url: movie.poster_url.clone(),
        })
        .collect()
}

fn first_paragraph(text: Option<&str>) -> Option<&str> {
    text.and_then(|t| t.lines().map(str::trim).find(|line| !line.is_empty()))
}
