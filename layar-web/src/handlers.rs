use askama::Template;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse};
use serde::Deserialize;
use url::form_urlencoded;

use layar_core::lookup::{find_cinema_by_id, find_movie_by_id};
use layar_core::view::{
    build_cinema_detail, build_hero_slides, build_listing, build_movie_detail,
    build_now_showing, ListingView, SynopsisView,
};
use layar_core::{Facets, FilterCriteria};

use crate::data;
use crate::state::AppState;
use crate::summary;
use crate::templates::{
    brand_css_class, card_ctx, detail_template, hero_ctx, movie_template, strip_ctx,
    CardCtx, CinemaGridTemplate, FacetLink, FiltersCtx, IndexTemplate, MessageTemplate,
};

const CINEMA_ID_MISSING: &str = "No cinema id was found in the URL.";
const CINEMA_NOT_FOUND: &str = "No cinema with this id exists in the data document.";
const MOVIE_ID_MISSING: &str =
    "No film id was found in the URL. Check the link from the cinema page.";
const MOVIE_NOT_FOUND: &str = "No film with this id exists in the data document.";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingParams {
    pub q: Option<String>,
    pub city: Option<String>,
    pub brand: Option<String>,
    pub age: Option<String>,
    pub genre: Option<String>,
}

impl ListingParams {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            text: self.q.clone(),
            city: self.city.clone(),
            brand: self.brand.clone(),
            age_rating: self.age.clone(),
            genre: self.genre.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DetailParams {
    pub cinema: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MovieParams {
    pub movie: Option<String>,
}

pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> impl IntoResponse {
    render_listing_page(&state, &params).await
}

/// The grid region. An HTMX request gets just the partial; anything else
/// gets the full page, mirroring progressive enhancement on the filter form.
pub async fn cinemas_grid(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let is_htmx = headers.get("HX-Request").is_some();
    if !is_htmx {
        return render_listing_page(&state, &params).await;
    }

    let template = match data::load_cinemas(&state).await {
        Ok(cinemas) => {
            let criteria = params.criteria();
            let filtered = criteria.apply(&cinemas);
            let (cards, notice) = grid_parts(build_listing(&filtered, cinemas.len()));
            CinemaGridTemplate { cards, notice }
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to load data document");
            CinemaGridTemplate {
                cards: Vec::new(),
                notice: Some(data::failure_message(&err).to_string()),
            }
        }
    };
    Html(template.render().expect("Template rendering failed"))
}

pub async fn cinema_detail(
    State(state): State<AppState>,
    Query(params): Query<DetailParams>,
) -> impl IntoResponse {
    let Some(cinema_id) = present(params.cinema) else {
        return render_message("Cinema not found", CINEMA_ID_MISSING);
    };

    let cinemas = match data::load_cinemas(&state).await {
        Ok(cinemas) => cinemas,
        Err(err) => {
            tracing::error!(error = %err, "failed to load data document");
            return render_message("Something went wrong", data::failure_message(&err));
        }
    };

    let Some(cinema) = find_cinema_by_id(&cinemas, &cinema_id) else {
        tracing::debug!(%cinema_id, "cinema id not present in canonical list");
        return render_message("Cinema not found", CINEMA_NOT_FOUND);
    };

    let view = build_cinema_detail(cinema);
    let template = detail_template(&view);
    Html(template.render().expect("Template rendering failed"))
}

pub async fn movie_detail(
    State(state): State<AppState>,
    Query(params): Query<MovieParams>,
) -> impl IntoResponse {
    let Some(movie_id) = present(params.movie) else {
        return render_message("Film not found", MOVIE_ID_MISSING);
    };

    let cinemas = match data::load_cinemas(&state).await {
        Ok(cinemas) => cinemas,
        Err(err) => {
            tracing::error!(error = %err, "failed to load data document");
            return render_message("Something went wrong", data::failure_message(&err));
        }
    };

    let Some(lookup) = find_movie_by_id(&cinemas, &movie_id) else {
        tracing::debug!(%movie_id, "movie id not present in canonical list");
        return render_message("Film not found", MOVIE_NOT_FOUND);
    };

    let view = build_movie_detail(lookup.movie, &lookup.cinema_names);
    let mut template = movie_template(&view);

    // The synopsis block: written text wins; otherwise a best-effort
    // Wikipedia lookup that never blocks the rest of the page on failure.
    match &view.synopsis {
        SynopsisView::Paragraphs(paragraphs) => {
            template.paragraphs = paragraphs.clone();
        }
        SynopsisView::Missing => {
            let title = lookup.movie.title.as_deref();
            let fetched = match (state.config.summary.enabled, title) {
                (true, Some(title)) => Some(summary::fetch_summary(&state, title).await),
                _ => None,
            };
            match fetched {
                Some(Some(wiki)) => {
                    template.paragraphs = vec![wiki.extract];
                    template.wiki_source = Some(wiki.source_href);
                }
                Some(None) => {
                    template.synopsis_note = Some(summary::UNAVAILABLE.to_string());
                }
                None => {
                    template.synopsis_note = Some(SynopsisView::PLACEHOLDER.to_string());
                }
            }
        }
    }

    Html(template.render().expect("Template rendering failed"))
}

async fn render_listing_page(state: &AppState, params: &ListingParams) -> Html<String> {
    let cinemas = match data::load_cinemas(state).await {
        Ok(cinemas) => cinemas,
        Err(err) => {
            tracing::error!(error = %err, "failed to load data document");
            let template = empty_index(
                params.criteria(),
                Some(data::failure_message(&err).to_string()),
            );
            return Html(template.render().expect("Template rendering failed"));
        }
    };

    let criteria = params.criteria();
    let filtered = criteria.apply(&cinemas);
    let (cards, notice) = grid_parts(build_listing(&filtered, cinemas.len()));
    let facets = Facets::build(&cinemas);

    let template = IndexTemplate {
        hero: build_hero_slides(&cinemas).first().map(hero_ctx),
        strip: build_now_showing(&cinemas).iter().map(strip_ctx).collect(),
        brand_links: brand_facet_links(&facets, &criteria),
        city_links: city_facet_links(&facets, &criteria),
        age_options: facets.age_ratings.clone(),
        genre_options: facets.genres.clone(),
        filters: filters_ctx(&criteria),
        cards,
        notice,
    };
    Html(template.render().expect("Template rendering failed"))
}

fn grid_parts(listing: ListingView) -> (Vec<CardCtx>, Option<String>) {
    match listing {
        ListingView::Cards(cards) => (cards.iter().map(card_ctx).collect(), None),
        ListingView::Empty(reason) => (Vec::new(), Some(reason.message().to_string())),
    }
}

fn empty_index(criteria: FilterCriteria, notice: Option<String>) -> IndexTemplate {
    IndexTemplate {
        hero: None,
        strip: Vec::new(),
        brand_links: Vec::new(),
        city_links: Vec::new(),
        age_options: Vec::new(),
        genre_options: Vec::new(),
        filters: filters_ctx(&criteria),
        cards: Vec::new(),
        notice,
    }
}

fn filters_ctx(criteria: &FilterCriteria) -> FiltersCtx {
    FiltersCtx {
        q: criteria.text.clone().unwrap_or_default(),
        city: criteria.city.clone().unwrap_or_default(),
        brand: criteria.brand.clone().unwrap_or_default(),
        age: criteria.age_rating.clone().unwrap_or_default(),
        genre: criteria.genre.clone().unwrap_or_default(),
    }
}

/// Facet links encode toggle semantics: clicking the active value links back
/// to the listing with that criterion cleared.
fn city_facet_links(facets: &Facets, criteria: &FilterCriteria) -> Vec<FacetLink> {
    facets
        .cities
        .iter()
        .map(|city| {
            let mut toggled = criteria.clone();
            toggled.toggle_city(city);
            FacetLink {
                label: city.clone(),
                href: listing_href(&toggled),
                active: criteria.city.as_deref() == Some(city.as_str()),
                class: String::new(),
            }
        })
        .collect()
}

fn brand_facet_links(facets: &Facets, criteria: &FilterCriteria) -> Vec<FacetLink> {
    facets
        .brands
        .iter()
        .map(|brand| {
            let mut toggled = criteria.clone();
            toggled.toggle_brand(brand);
            FacetLink {
                label: brand.clone(),
                href: listing_href(&toggled),
                active: criteria.brand.as_deref() == Some(brand.as_str()),
                class: brand_css_class(brand),
            }
        })
        .collect()
}

fn listing_href(criteria: &FilterCriteria) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, value) in [
        ("q", &criteria.text),
        ("city", &criteria.city),
        ("brand", &criteria.brand),
        ("age", &criteria.age_rating),
        ("genre", &criteria.genre),
    ] {
        if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            query.append_pair(key, value);
        }
    }
    let query = query.finish();
    if query.is_empty() {
        "/cinemas".to_string()
    } else {
        format!("/cinemas?{query}")
    }
}

fn render_message(title: &str, message: &str) -> Html<String> {
    let template = MessageTemplate {
        title: title.to_string(),
        message: message.to_string(),
    };
    Html(template.render().expect("Template rendering failed"))
}

fn present(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use layar_core::Cinema;

    fn cinemas() -> Vec<Cinema> {
        layar_core::normalize::normalize(
            &serde_json::json!([
                {"id": "c1", "name": "CGV Sun Plaza", "city": "Medan",
                 "movies": [{"id": "m1", "title": "Foo", "genres": ["Drama"], "ageRating": "17+"}]},
                {"id": "c2", "name": "Hermes XXI", "city": "Binjai"}
            ]),
            &layar_core::BrandClassifier::default(),
        )
    }

    #[test]
    fn facet_links_toggle_the_active_value_off() {
        let facets = Facets::build(&cinemas());
        let criteria = FilterCriteria {
            city: Some("Medan".to_string()),
            ..Default::default()
        };
        let links = city_facet_links(&facets, &criteria);

        let medan = links.iter().find(|l| l.label == "Medan").unwrap();
        assert!(medan.active);
        assert_eq!(medan.href, "/cinemas");

        let binjai = links.iter().find(|l| l.label == "Binjai").unwrap();
        assert!(!binjai.active);
        assert_eq!(binjai.href, "/cinemas?city=Binjai");
    }

    #[test]
    fn listing_href_preserves_the_other_criteria() {
        let criteria = FilterCriteria {
            text: Some("foo".to_string()),
            brand: Some("Cinema XXI".to_string()),
            ..Default::default()
        };
        assert_eq!(listing_href(&criteria), "/cinemas?q=foo&brand=Cinema+XXI");
    }

    #[test]
    fn full_page_listing_carries_facets_and_cards() {
        let list = cinemas();
        let criteria = FilterCriteria::default();
        let filtered = criteria.apply(&list);
        let (cards, notice) = grid_parts(build_listing(&filtered, list.len()));
        assert_eq!(cards.len(), 2);
        assert!(notice.is_none());
        assert_eq!(cards[0].detail_href, "/detail?cinema=c1");
    }
}
