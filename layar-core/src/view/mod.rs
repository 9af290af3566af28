//! Pure view-model builders: each page variant maps records to a
//! render-instruction value with every optional-field fallback applied, and a
//! thin adapter in the web crate commits those values to HTML.

pub mod detail;
pub mod home;
pub mod listing;
pub mod movie;

pub use detail::{build_cinema_detail, CinemaDetailView, MapView, MovieCard};
pub use home::{build_hero_slides, build_now_showing, HeroSlide, StripCard};
pub use listing::{build_listing, CinemaCard, EmptyReason, ListingView};
pub use movie::{build_movie_detail, MovieDetailView, SynopsisView, TrailerView};

/// Fallback display strings, enumerated once rather than scattered over call
/// sites.
pub const UNTITLED: &str = "Untitled";
pub const UNNAMED_CINEMA: &str = "Unnamed Cinema";
pub const UNKNOWN_CITY: &str = "Unknown city";
pub const NOT_RATED: &str = "NR";

/// The fixed age-rating enumeration, as style hints; anything outside it
/// renders unstyled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeStyle {
    AllAges,
    Teen13,
    Mature17,
    Adult21,
}

/// An age-rating badge: the label to print plus an optional style hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeBadge {
    pub label: String,
    pub style: Option<AgeStyle>,
}

pub fn age_badge(age_rating: Option<&str>) -> AgeBadge {
    let label = age_rating
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(NOT_RATED)
        .to_string();
    let style = match label.as_str() {
        "SU" => Some(AgeStyle::AllAges),
        "13+" => Some(AgeStyle::Teen13),
        "17+" => Some(AgeStyle::Mature17),
        "21+" => Some(AgeStyle::Adult21),
        _ => None,
    };
    AgeBadge { label, style }
}

/// Five-star row for a 0-5 rating score, rounded to the nearest whole star.
/// An absent score renders as full stars, matching the landing hero.
pub fn star_row(rating_score: Option<f64>) -> String {
    match rating_score {
        None => "★★★★★".to_string(),
        Some(score) => {
            let full = (score.round().clamp(0.0, 5.0)) as usize;
            let mut row = "★".repeat(full);
            row.push_str(&"☆".repeat(5 - full));
            row
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_badge_styles_the_fixed_enumeration_only() {
        assert_eq!(age_badge(Some("SU")).style, Some(AgeStyle::AllAges));
        assert_eq!(age_badge(Some("13+")).style, Some(AgeStyle::Teen13));
        assert_eq!(age_badge(Some("17+")).style, Some(AgeStyle::Mature17));
        assert_eq!(age_badge(Some("21+")).style, Some(AgeStyle::Adult21));
        assert_eq!(age_badge(Some("R")).style, None);
        assert_eq!(age_badge(Some("R")).label, "R");
    }

    #[test]
    fn missing_age_rating_renders_nr() {
        let badge = age_badge(None);
        assert_eq!(badge.label, NOT_RATED);
        assert_eq!(badge.style, None);
        assert_eq!(age_badge(Some("  ")).label, NOT_RATED);
    }

    #[test]
    fn star_row_rounds_to_the_nearest_whole_star() {
        assert_eq!(star_row(Some(3.4)), "★★★☆☆");
        assert_eq!(star_row(Some(3.5)), "★★★★☆");
        assert_eq!(star_row(Some(0.0)), "☆☆☆☆☆");
        assert_eq!(star_row(Some(9.0)), "★★★★★");
        assert_eq!(star_row(None), "★★★★★");
    }
}
