//! JSON routes: the `/api` proxies and `/health`

use axum::extract::{Path, Query, State};
use axum::{routing::get, Json, Router};
use serde::Serialize;
use serde_json::Value;

use crate::proxy::{self, SearchParams};
use crate::server::error::{AppError, AppResult};
use crate::server::state::AppState;

const DETAIL_ERROR: &str = "Failed to fetch movie details";
const SEARCH_ERROR: &str = "Failed to search movies";
const TRENDING_ERROR: &str = "Failed to fetch movies";

/// Routes mounted under `/api`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/movie/{id}", get(movie_detail))
        .route("/search", get(search))
        .route("/trending", get(trending))
}

/// GET /api/movie/{id} -- movie merged with its credits
async fn movie_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    proxy::movie_detail(&state.tmdb, &id)
        .await
        .map(Json)
        .map_err(|e| AppError::from_proxy(e, DETAIL_ERROR))
}

/// GET /api/search?query=&page= -- Provider search page, relayed
async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Value>> {
    proxy::search(&state.tmdb, &params)
        .await
        .map(Json)
        .map_err(|e| AppError::from_proxy(e, SEARCH_ERROR))
}

/// GET /api/trending -- weekly trending movies, relayed
async fn trending(State(state): State<AppState>) -> AppResult<Json<Value>> {
    proxy::trending(&state.tmdb)
        .await
        .map(Json)
        .map_err(|e| AppError::from_proxy(e, TRENDING_ERROR))
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /health -- liveness only; the Provider is not contacted
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount health check routes (root level, not under `/api`).
pub fn health_router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
