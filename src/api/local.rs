//! Client for a running CineMax server's `/api` surface
//!
//! Lets the views be driven over HTTP exactly as a browser would drive them:
//! one request per fetch, against the proxy routes.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::models::{MovieDetail, SearchResultPage};
use crate::source::{self, MovieSource, SourceError};

/// HTTP client for `/api/*`
#[derive(Debug, Clone)]
pub struct LocalApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl LocalApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(path = %path, "API request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl MovieSource for LocalApiClient {
    async fn trending(&self) -> Result<SearchResultPage, SourceError> {
        self.get(source::TRENDING_PATH).await
    }

    async fn search(&self, query: &str, page: &str) -> Result<SearchResultPage, SourceError> {
        self.get(&source::search_path(query, page)).await
    }

    async fn movie(&self, id: &str) -> Result<MovieDetail, SourceError> {
        self.get(&source::movie_path(id)).await
    }
}
