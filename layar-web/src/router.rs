use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::handlers::{cinema_detail, cinemas_grid, index, movie_detail};
use crate::state::AppState;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/cinemas", get(cinemas_grid))
        .route("/detail", get(cinema_detail))
        .route("/movie", get(movie_detail))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
}
