use serde::Deserialize;

use crate::domain::Cinema;

/// Current filter criteria. All populated criteria are conjunctive; unset or
/// blank criteria impose no constraint. Owned by the page controller for the
/// life of a page, never ambient global state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring over cinema name, city, and movie titles.
    pub text: Option<String>,
    pub city: Option<String>,
    pub brand: Option<String>,
    /// Matches when any movie carries this exact age-rating string.
    pub age_rating: Option<String>,
    /// Matches when any movie's genre list contains this exact string.
    pub genre: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        active(&self.text).is_none()
            && active(&self.city).is_none()
            && active(&self.brand).is_none()
            && active(&self.age_rating).is_none()
            && active(&self.genre).is_none()
    }

    /// Selecting an already-active city clears it; facet clicks toggle.
    pub fn toggle_city(&mut self, city: &str) {
        self.city = toggled(self.city.take(), city);
    }

    /// Same toggle semantics as [`Self::toggle_city`], for the brand facet.
    pub fn toggle_brand(&mut self, brand: &str) {
        self.brand = toggled(self.brand.take(), brand);
    }

    /// Pure filter over the canonical list: relative order is preserved and
    /// re-applying the same criteria always yields the same subset.
    pub fn apply<'a>(&self, cinemas: &'a [Cinema]) -> Vec<&'a Cinema> {
        cinemas.iter().filter(|c| self.matches(c)).collect()
    }

    fn matches(&self, cinema: &Cinema) -> bool {
        if let Some(city) = active(&self.city) {
            if cinema.city.as_deref() != Some(city) {
                return false;
            }
        }
        if let Some(brand) = active(&self.brand) {
            if cinema.brand != brand {
                return false;
            }
        }
        if let Some(age) = active(&self.age_rating) {
            let has_age = cinema
                .movies
                .iter()
                .any(|m| m.age_rating.as_deref() == Some(age));
            if !has_age {
                return false;
            }
        }
        if let Some(genre) = active(&self.genre) {
            let has_genre = cinema
                .movies
                .iter()
                .any(|m| m.genres.iter().any(|g| g == genre));
            if !has_genre {
                return false;
            }
        }
        if let Some(text) = active(&self.text) {
            let needle = text.to_lowercase();
            let in_cinema = contains_ci(cinema.name.as_deref(), &needle)
                || contains_ci(cinema.city.as_deref(), &needle);
            let in_movies = cinema
                .movies
                .iter()
                .any(|m| contains_ci(m.title.as_deref(), &needle));
            if !in_cinema && !in_movies {
                return false;
            }
        }
        true
    }
}

fn active(criterion: &Option<String>) -> Option<&str> {
    criterion
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn toggled(current: Option<String>, value: &str) -> Option<String> {
    if current.as_deref() == Some(value) {
        None
    } else {
        Some(value.to_string())
    }
}

fn contains_ci(haystack: Option<&str>, lowered_needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(lowered_needle))
}
