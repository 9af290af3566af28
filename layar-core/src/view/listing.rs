use crate::domain::Cinema;
use crate::view::{non_blank, UNKNOWN_CITY, UNNAMED_CINEMA};

/// Render instructions for the listing grid: either summary cards or one
/// explicit empty state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingView {
    Cards(Vec<CinemaCard>),
    Empty(EmptyReason),
}

/// "No data at all" and "no results for this filter" are deliberately
/// distinct states with distinct wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    NoData,
    NoMatch,
}

impl EmptyReason {
    pub fn message(self) -> &'static str {
        match self {
            EmptyReason::NoData => {
                "No cinema data is available. The data document is empty or not in a supported format."
            }
            EmptyReason::NoMatch => "No cinemas match the current filters.",
        }
    }
}

/// One cinema summary card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CinemaCard {
    /// Join key for the detail link; empty when the record carries no id.
    pub id: String,
    pub brand: String,
    pub name: String,
    pub city: String,
    pub address: Option<String>,
    pub image_url: Option<String>,
    /// Rating, ticket price, and studio count, present fields only.
    pub badges: Vec<String>,
    pub map_link: Option<String>,
}

/// Maps a filtered list to listing instructions. `total` is the size of the
/// canonical list, used to tell an empty dataset from an empty filter result.
pub fn build_listing(filtered: &[&Cinema], total: usize) -> ListingView {
    if filtered.is_empty() {
        let reason = if total == 0 {
            EmptyReason::NoData
        } else {
            EmptyReason::NoMatch
        };
        return ListingView::Empty(reason);
    }
    ListingView::Cards(filtered.iter().map(|c| cinema_card(c)).collect())
}

fn cinema_card(cinema: &Cinema) -> CinemaCard {
    let mut badges = Vec::new();
    if let Some(rating) = non_blank(cinema.rating.as_deref()) {
        badges.push(format!("Rating {rating}"));
    }
    if let Some(price) = non_blank(cinema.ticket_price.as_deref()) {
        badges.push(price.to_string());
    }
    if let Some(studios) = non_blank(cinema.total_studios.as_deref()) {
        badges.push(format!("{studios} studios"));
    }

    CinemaCard {
        id: cinema.id.clone().unwrap_or_default(),
        brand: cinema.brand.clone(),
        name: cinema
            .name
            .clone()
            .unwrap_or_else(|| UNNAMED_CINEMA.to_string()),
        city: cinema
            .city
            .clone()
            .unwrap_or_else(|| UNKNOWN_CITY.to_string()),
        address: cinema.address.clone(),
        image_url: cinema.image_url.clone(),
        badges,
        map_link: cinema.map_link.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::BrandClassifier;
    use crate::normalize::normalize;
    use serde_json::json;

    #[test]
    fn empty_dataset_and_empty_filter_result_are_distinct() {
        assert_eq!(build_listing(&[], 0), ListingView::Empty(EmptyReason::NoData));
        assert_eq!(build_listing(&[], 3), ListingView::Empty(EmptyReason::NoMatch));
        assert_ne!(
            EmptyReason::NoData.message(),
            EmptyReason::NoMatch.message()
        );
    }

    #[test]
    fn cards_carry_fallbacks_and_present_badges_only() {
        let cinemas = normalize(
            &json!([{
                "id": "c1",
                "name": "CGV Sun Plaza",
                "city": "Medan",
                "rating": "4.6",
                "totalStudios": 8,
                "movies": [{"id": "m1"}]
            },
            {"movies": [{"id": "m2"}]}]),
            &BrandClassifier::default(),
        );
        let refs: Vec<&Cinema> = cinemas.iter().collect();

        let ListingView::Cards(cards) = build_listing(&refs, cinemas.len()) else {
            panic!("expected cards");
        };

        assert_eq!(cards[0].badges, vec!["Rating 4.6", "8 studios"]);
        assert_eq!(cards[0].brand, "CGV");

        assert_eq!(cards[1].id, "");
        assert_eq!(cards[1].name, UNNAMED_CINEMA);
        assert_eq!(cards[1].city, UNKNOWN_CITY);
        assert!(cards[1].badges.is_empty());
    }
}
