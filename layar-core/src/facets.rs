use crate::brand::OTHER_BRAND;
use crate::domain::Cinema;

/// Badge/filter order for the fixed age-rating enumeration; ratings outside
/// this set trail in first-observed order.
pub const AGE_RATING_ORDER: [&str; 4] = ["SU", "13+", "17+", "21+"];

/// Distinct filterable values derived from the canonical list. Rebuilt from
/// scratch whenever the list changes; never updated incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    /// Deduplicated, ascending alphabetical.
    pub cities: Vec<String>,
    /// Deduplicated, first-observed order, excluding the "Other" catch-all.
    pub brands: Vec<String>,
    /// Deduplicated, ascending alphabetical.
    pub genres: Vec<String>,
    /// Deduplicated, [`AGE_RATING_ORDER`] first, stragglers afterwards.
    pub age_ratings: Vec<String>,
}

impl Facets {
    /// Single pass over every cinema and every nested movie.
    pub fn build(cinemas: &[Cinema]) -> Self {
        let mut cities: Vec<String> = Vec::new();
        let mut brands: Vec<String> = Vec::new();
        let mut genres: Vec<String> = Vec::new();
        let mut observed_ages: Vec<String> = Vec::new();

        for cinema in cinemas {
            if let Some(city) = &cinema.city {
                push_unique(&mut cities, city);
            }
            if !cinema.brand.is_empty() && cinema.brand != OTHER_BRAND {
                push_unique(&mut brands, &cinema.brand);
            }
            for movie in &cinema.movies {
                for genre in &movie.genres {
                    push_unique(&mut genres, genre);
                }
                if let Some(age) = &movie.age_rating {
                    push_unique(&mut observed_ages, age);
                }
            }
        }

        sort_alphabetical(&mut cities);
        sort_alphabetical(&mut genres);

        let mut age_ratings: Vec<String> = AGE_RATING_ORDER
            .iter()
            .filter(|known| observed_ages.iter().any(|a| a == *known))
            .map(|known| known.to_string())
            .collect();
        for age in observed_ages {
            push_unique(&mut age_ratings, &age);
        }

        Self {
            cities,
            brands,
            genres,
            age_ratings,
        }
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

// Approximates the locale-aware ordering of the original site: compare
// case-insensitively, tie-break on the raw string for determinism.
fn sort_alphabetical(values: &mut [String]) {
    values.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::BrandClassifier;
    use crate::normalize::normalize;
    use serde_json::json;

    fn cinemas() -> Vec<Cinema> {
        let raw = json!([
            {
                "name": "Hermes XXI",
                "city": "Medan",
                "movies": [
                    {"title": "Foo", "genres": ["Drama", "Action"], "ageRating": "17+"},
                    {"title": "Bar", "genres": ["action", "Drama"], "ageRating": "SU"}
                ]
            },
            {"name": "CGV Sun Plaza", "city": "Medan", "movies": [{"ageRating": "17+"}]},
            {"name": "Bioskop Keluarga", "city": "Binjai"}
        ]);
        normalize(&raw, &BrandClassifier::default())
    }

    #[test]
    fn cities_are_deduplicated_and_sorted() {
        let facets = Facets::build(&cinemas());
        assert_eq!(facets.cities, vec!["Binjai", "Medan"]);
    }

    #[test]
    fn brands_keep_observation_order_and_exclude_other() {
        let facets = Facets::build(&cinemas());
        assert_eq!(facets.brands, vec!["Cinema XXI", "CGV"]);
    }

    #[test]
    fn genres_are_deduplicated_case_sensitively_and_sorted() {
        let facets = Facets::build(&cinemas());
        // "Action" and "action" are distinct tag strings in the source data.
        assert_eq!(facets.genres, vec!["Action", "action", "Drama"]);
    }

    #[test]
    fn age_ratings_follow_the_fixed_enumeration_order() {
        let facets = Facets::build(&cinemas());
        assert_eq!(facets.age_ratings, vec!["SU", "17+"]);
    }

    #[test]
    fn unknown_age_ratings_trail_the_fixed_set() {
        let raw = json!([{
            "name": "Hermes XXI",
            "city": "Medan",
            "movies": [{"ageRating": "R"}, {"ageRating": "13+"}]
        }]);
        let cinemas = normalize(&raw, &BrandClassifier::default());
        let facets = Facets::build(&cinemas);
        assert_eq!(facets.age_ratings, vec!["13+", "R"]);
    }

    #[test]
    fn missing_fields_do_not_break_the_walk() {
        let facets = Facets::build(&[Cinema::default()]);
        assert_eq!(facets, Facets::default());
    }
}
