//! HTML page routes
//!
//! Each handler builds its view, loads it through the in-process
//! [`MovieSource`](crate::source::MovieSource), and returns the rendered
//! document. Fetch failures render inside the page rather than as HTTP
//! errors.

use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::{routing::get, Router};

use crate::server::state::AppState;
use crate::ui::{DetailView, HomeView, SearchPageParams, SearchResultsView};

/// Fallback artwork for movies and people without an image
pub const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="500" height="750" viewBox="0 0 500 750"><rect width="500" height="750" fill="#1e293b"/><rect x="150" y="265" width="200" height="160" rx="12" fill="none" stroke="#475569" stroke-width="10"/><circle cx="205" cy="315" r="18" fill="#475569"/><path d="M160 415 L230 350 L275 390 L305 365 L340 415 Z" fill="#475569"/><text x="250" y="490" font-family="sans-serif" font-size="28" fill="#64748b" text-anchor="middle">No Image</text></svg>"##;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/search", get(search))
        .route("/movie/{id}", get(movie))
        .route("/placeholder.svg", get(placeholder))
}

/// GET / -- trending this week
async fn home(State(state): State<AppState>) -> Html<String> {
    let mut view = HomeView::new();
    view.load(state.source()).await;
    Html(view.render())
}

/// GET /search?q=&page= -- prompt, or one page of results
async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchPageParams>,
) -> Html<String> {
    let mut view = SearchResultsView::new();
    view.load(&params, state.source()).await;
    Html(view.render())
}

/// GET /movie/{id} -- full detail page
async fn movie(State(state): State<AppState>, Path(id): Path<String>) -> Html<String> {
    let mut view = DetailView::new(id);
    view.load(state.source()).await;
    Html(view.render())
}

async fn placeholder() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        PLACEHOLDER_SVG,
    )
}
