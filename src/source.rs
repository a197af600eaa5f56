//! Where the views get their data from
//!
//! [`MovieSource`] is the seam between view state and the network. The
//! server renders pages through the in-process implementation on
//! [`TmdbClient`] (same proxy code as the `/api` routes); remote renderers
//! use [`crate::api::LocalApiClient`] against a running server's `/api`.

use async_trait::async_trait;
use thiserror::Error;

use crate::api::tmdb::{TmdbClient, TmdbError};
use crate::models::{MovieDetail, SearchResultPage};
use crate::proxy::{self, ProxyError, SearchParams};

/// Why a view fetch failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Undecodable response: {0}")]
    Decode(String),
}

impl From<TmdbError> for SourceError {
    fn from(err: TmdbError) -> Self {
        match err {
            TmdbError::Status(code) => SourceError::Status(code),
            TmdbError::InvalidResponse(msg) => SourceError::Decode(msg),
            TmdbError::RequestFailed(e) => SourceError::Transport(e.to_string()),
        }
    }
}

impl From<ProxyError> for SourceError {
    fn from(err: ProxyError) -> Self {
        match err {
            ProxyError::MissingQuery => SourceError::Rejected(err.to_string()),
            ProxyError::Upstream(e) => e.into(),
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Decode(err.to_string())
    }
}

/// Data access used by the views
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// First page of weekly trending movies
    async fn trending(&self) -> Result<SearchResultPage, SourceError>;

    /// One page of title search results
    async fn search(&self, query: &str, page: &str) -> Result<SearchResultPage, SourceError>;

    /// Movie with cast and crew attached
    async fn movie(&self, id: &str) -> Result<MovieDetail, SourceError>;
}

#[async_trait]
impl MovieSource for TmdbClient {
    async fn trending(&self) -> Result<SearchResultPage, SourceError> {
        let value = proxy::trending(self).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn search(&self, query: &str, page: &str) -> Result<SearchResultPage, SourceError> {
        let value = proxy::search(self, &SearchParams::new(query, page)).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn movie(&self, id: &str) -> Result<MovieDetail, SourceError> {
        let value = proxy::movie_detail(self, id).await?;
        Ok(serde_json::from_value(value)?)
    }
}

// =============================================================================
// `/api` paths
// =============================================================================

/// `/api/search` path for a query and page, both URL-encoded
pub fn search_path(query: &str, page: &str) -> String {
    format!(
        "/api/search?query={}&page={}",
        urlencoding::encode(query),
        urlencoding::encode(page)
    )
}

/// `/api/movie/{id}` path, id percent-encoded as one segment
pub fn movie_path(id: &str) -> String {
    format!("/api/movie/{}", urlencoding::encode(id))
}

pub const TRENDING_PATH: &str = "/api/trending";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_path_encodes() {
        assert_eq!(
            search_path("inception", "1"),
            "/api/search?query=inception&page=1"
        );
        assert_eq!(
            search_path("the dark knight", "2"),
            "/api/search?query=the%20dark%20knight&page=2"
        );
        assert_eq!(search_path("a&b", "1"), "/api/search?query=a%26b&page=1");
    }

    #[test]
    fn test_movie_path_encodes_segment() {
        assert_eq!(movie_path("27205"), "/api/movie/27205");
        assert_eq!(movie_path("a/b"), "/api/movie/a%2Fb");
    }

    #[test]
    fn test_proxy_error_conversion() {
        assert_eq!(
            SourceError::from(ProxyError::MissingQuery),
            SourceError::Rejected("Query parameter is required".into())
        );
        assert_eq!(
            SourceError::from(ProxyError::Upstream(TmdbError::Status(503))),
            SourceError::Status(503)
        );
    }
}
