//! Askama templates plus the flattening adapter from the core
//! render-instruction values to template fields. Templates stay dumb: all
//! fallbacks and link gating are decided before rendering.

use askama::Template;
use url::form_urlencoded;

use layar_core::view::{
    AgeBadge, AgeStyle, CinemaCard, CinemaDetailView, HeroSlide, MapView, MovieCard,
    MovieDetailView, StripCard, TrailerView,
};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub hero: Option<HeroCtx>,
    pub strip: Vec<StripCtx>,
    pub brand_links: Vec<FacetLink>,
    pub city_links: Vec<FacetLink>,
    pub age_options: Vec<String>,
    pub genre_options: Vec<String>,
    pub filters: FiltersCtx,
    pub cards: Vec<CardCtx>,
    pub notice: Option<String>,
}

/// The grid fragment re-rendered on filter changes (HTMX target). Shares its
/// field names with [`IndexTemplate`] so the same partial serves both.
#[derive(Template)]
#[template(path = "cinema_grid.html")]
pub struct CinemaGridTemplate {
    pub cards: Vec<CardCtx>,
    pub notice: Option<String>,
}

#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailTemplate {
    pub name: String,
    pub address_line: String,
    pub meta_line: String,
    pub image_url: Option<String>,
    pub map_embed: Option<String>,
    pub map_link: Option<String>,
    pub map_placeholder: String,
    pub schedule_note: String,
    pub movies: Vec<MovieCardCtx>,
    pub empty_message: Option<String>,
}

#[derive(Template)]
#[template(path = "movie.html")]
pub struct MovieTemplate {
    pub title: String,
    pub director: String,
    pub casts: String,
    pub duration: String,
    pub genres_line: String,
    pub age_label: String,
    pub age_class: String,
    pub poster_url: Option<String>,
    pub trailer_embed_url: Option<String>,
    pub trailer_link: Option<String>,
    pub trailer_link_label: String,
    pub trailer_placeholder: String,
    pub paragraphs: Vec<String>,
    pub synopsis_note: Option<String>,
    pub wiki_source: Option<String>,
    pub screening_line: String,
}

/// Full-page fallback for identifier-missing, not-found, and data failures.
#[derive(Template)]
#[template(path = "message.html")]
pub struct MessageTemplate {
    pub title: String,
    pub message: String,
}

pub struct HeroCtx {
    pub title: String,
    pub year_label: String,
    pub stars: String,
    pub description: String,
    pub background_url: String,
}

pub struct StripCtx {
    pub movie_href: Option<String>,
    pub title: String,
    pub city: String,
    pub poster_url: Option<String>,
}

pub struct FacetLink {
    pub label: String,
    pub href: String,
    pub active: bool,
    pub class: String,
}

/// Current filter values echoed back into the search form; empty string
/// means unset.
#[derive(Default)]
pub struct FiltersCtx {
    pub q: String,
    pub city: String,
    pub brand: String,
    pub age: String,
    pub genre: String,
}

pub struct CardCtx {
    pub detail_href: String,
    pub brand: String,
    pub name: String,
    pub city: String,
    pub address: Option<String>,
    pub image_url: Option<String>,
    pub badges: Vec<String>,
    pub map_link: Option<String>,
}

pub struct MovieCardCtx {
    pub title: String,
    pub age_label: String,
    pub age_class: String,
    pub poster_url: Option<String>,
    pub meta_line: String,
    pub tags: Vec<String>,
    pub description: String,
    pub synopsis_href: Option<String>,
    pub map_link: Option<String>,
}

pub fn card_ctx(card: &CinemaCard) -> CardCtx {
    CardCtx {
        detail_href: format!("/detail?cinema={}", urlencode(&card.id)),
        brand: card.brand.clone(),
        name: card.name.clone(),
        city: card.city.clone(),
        address: card.address.clone(),
        image_url: card.image_url.clone(),
        badges: card.badges.clone(),
        map_link: card.map_link.clone(),
    }
}

pub fn hero_ctx(slide: &HeroSlide) -> HeroCtx {
    HeroCtx {
        title: slide.title.clone(),
        year_label: slide.year_label.clone(),
        stars: slide.stars.clone(),
        description: slide.description.clone(),
        background_url: slide.background_url.clone(),
    }
}

pub fn strip_ctx(card: &StripCard) -> StripCtx {
    StripCtx {
        movie_href: card
            .movie_id
            .as_deref()
            .map(|id| format!("/movie?movie={}", urlencode(id))),
        title: card.title.clone(),
        city: card.city.clone(),
        poster_url: card.poster_url.clone(),
    }
}

pub fn movie_card_ctx(card: &MovieCard) -> MovieCardCtx {
    MovieCardCtx {
        title: card.title.clone(),
        age_label: card.age.label.clone(),
        age_class: age_css_class(&card.age),
        poster_url: card.poster_url.clone(),
        meta_line: card.meta_line.clone(),
        tags: card.tags.clone(),
        description: card.description.clone(),
        synopsis_href: card
            .synopsis_link_id
            .as_deref()
            .map(|id| format!("/movie?movie={}", urlencode(id))),
        map_link: card.map_link.clone(),
    }
}

pub fn detail_template(view: &CinemaDetailView) -> DetailTemplate {
    let (map_embed, map_link) = match &view.map {
        MapView::Embed(src) => (Some(src.clone()), None),
        MapView::Link(href) => (None, Some(href.clone())),
        MapView::Unavailable => (None, None),
    };
    DetailTemplate {
        name: view.name.clone(),
        address_line: view.address_line.clone(),
        meta_line: view.meta_line.clone(),
        image_url: view.image_url.clone(),
        map_embed,
        map_link,
        map_placeholder: MapView::PLACEHOLDER.to_string(),
        schedule_note: view.schedule_note.clone(),
        movies: view.movies.iter().map(movie_card_ctx).collect(),
        empty_message: view.empty_message.map(str::to_string),
    }
}

/// Everything except the synopsis block, which the handler fills after the
/// best-effort enrichment fetch.
pub fn movie_template(view: &MovieDetailView) -> MovieTemplate {
    let (trailer_embed_url, trailer_link) = match &view.trailer {
        TrailerView::Embed { video_id } => (
            Some(format!("https://www.youtube.com/embed/{video_id}")),
            None,
        ),
        TrailerView::External { url } => (None, Some(url.clone())),
        TrailerView::Unavailable => (None, None),
    };
    MovieTemplate {
        title: view.title.clone(),
        director: view.director.clone(),
        casts: view.casts.clone(),
        duration: view.duration.clone(),
        genres_line: view.genres_line.clone(),
        age_label: view.age.label.clone(),
        age_class: age_css_class(&view.age),
        poster_url: view.poster_url.clone(),
        trailer_embed_url,
        trailer_link,
        trailer_link_label: TrailerView::EXTERNAL_LABEL.to_string(),
        trailer_placeholder: TrailerView::PLACEHOLDER.to_string(),
        paragraphs: Vec::new(),
        synopsis_note: None,
        wiki_source: None,
        screening_line: view.screening_line.clone(),
    }
}

pub fn age_css_class(badge: &AgeBadge) -> String {
    match badge.style {
        Some(AgeStyle::AllAges) => "rating-su",
        Some(AgeStyle::Teen13) => "rating-13",
        Some(AgeStyle::Mature17) => "rating-17",
        Some(AgeStyle::Adult21) => "rating-21",
        None => "",
    }
    .to_string()
}

pub fn brand_css_class(brand: &str) -> String {
    match brand {
        "Cinema XXI" => "brand-XXI",
        "CGV" => "brand-CGV",
        "Cinépolis" => "brand-Cinepolis",
        _ => "",
    }
    .to_string()
}

pub fn urlencode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
