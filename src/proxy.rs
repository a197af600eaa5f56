//! Proxy and aggregator logic behind the `/api` routes
//!
//! Kept free of HTTP framework types so the JSON routes and the in-process
//! page rendering share one implementation of each contract.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::api::tmdb::{TmdbClient, TmdbError};

/// Page used when a search request does not name one
pub const DEFAULT_PAGE: &str = "1";

/// Proxy failures, split by who is at fault
#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Query parameter is required")]
    MissingQuery,

    #[error(transparent)]
    Upstream(#[from] TmdbError),
}

/// Query string accepted by the Search Proxy
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub page: Option<String>,
}

impl SearchParams {
    pub fn new(query: impl Into<String>, page: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            page: Some(page.into()),
        }
    }

    /// The query, if present and non-empty
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }

    /// The page, verbatim, defaulting to "1" when absent or empty
    pub fn page(&self) -> &str {
        self.page
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PAGE)
    }
}

/// Search Proxy: validate, forward, relay the Provider JSON untouched.
///
/// A missing query is rejected before the Provider is contacted.
pub async fn search(client: &TmdbClient, params: &SearchParams) -> Result<Value, ProxyError> {
    let query = params.query().ok_or(ProxyError::MissingQuery)?;
    let page = params.page();

    tracing::debug!(query = %query, page = %page, "Search proxy");
    Ok(client.search_movies(query, page).await?)
}

/// Detail Aggregator: movie object plus `cast`/`crew`, all or nothing
pub async fn movie_detail(client: &TmdbClient, id: &str) -> Result<Value, ProxyError> {
    tracing::debug!(movie_id = %id, "Detail aggregator");
    Ok(client.movie_with_credits(id).await?)
}

/// Trending Proxy: weekly trending movies, relayed untouched
pub async fn trending(client: &TmdbClient) -> Result<Value, ProxyError> {
    Ok(client.trending_movies().await?)
}
