//! TMDB (The Movie Database) API client
//!
//! The Provider behind every page: trending, search, movie and credits.
//! Responses are returned as raw JSON so the proxies can relay them
//! unchanged; typed decoding happens in [`crate::models`].
//! API docs: https://developer.themoviedb.org/docs

use serde_json::{Map, Value};
use std::time::Duration;
use thiserror::Error;

/// Public TMDB v3 endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// TMDB API error types
#[derive(Error, Debug)]
pub enum TmdbError {
    #[error("Provider returned status {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

impl TmdbError {
    /// HTTP status the Provider answered with, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            TmdbError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TmdbError>;

/// TMDB API client
#[derive(Debug, Clone)]
pub struct TmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl TmdbClient {
    /// Create a new TMDB client against the public endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::with_timeout(api_key, base_url, Duration::from_secs(30))
    }

    /// Create a client with a custom base URL and per-request timeout
    pub fn with_timeout(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET an endpoint with the API key appended, returning the JSON body.
    ///
    /// `endpoint` may already carry a query string; the key is added with
    /// the right separator. Any non-2xx status is an error.
    async fn get(&self, endpoint: &str) -> Result<Value> {
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        let url = format!(
            "{}{}{}api_key={}",
            self.base_url,
            endpoint,
            separator,
            urlencoding::encode(&self.api_key)
        );

        tracing::debug!(endpoint = %endpoint, "TMDB request");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(endpoint = %endpoint, status = status.as_u16(), "TMDB request failed");
            return Err(TmdbError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| TmdbError::InvalidResponse(format!("JSON parse error: {}", e)))
    }

    /// Weekly trending movies, first page
    pub async fn trending_movies(&self) -> Result<Value> {
        self.get("/trending/movie/week").await
    }

    /// Search movies by title.
    ///
    /// Both parameters are URL-encoded; `page` is otherwise passed through
    /// as given, the Provider decides what an out-of-range page means.
    pub async fn search_movies(&self, query: &str, page: &str) -> Result<Value> {
        let endpoint = format!(
            "/search/movie?query={}&page={}",
            urlencoding::encode(query),
            urlencoding::encode(page)
        );
        self.get(&endpoint).await
    }

    /// Movie metadata by id
    pub async fn movie(&self, id: &str) -> Result<Value> {
        let endpoint = format!("/movie/{}", urlencoding::encode(id));
        self.get(&endpoint).await
    }

    /// Cast and crew for a movie
    pub async fn credits(&self, id: &str) -> Result<Value> {
        let endpoint = format!("/movie/{}/credits", urlencoding::encode(id));
        self.get(&endpoint).await
    }

    /// Movie metadata merged with its credits.
    ///
    /// Both requests run concurrently and the first failure fails the whole
    /// call; a half-built record is never returned.
    pub async fn movie_with_credits(&self, id: &str) -> Result<Value> {
        let (movie, credits) = tokio::try_join!(self.movie(id), self.credits(id))?;
        merge_credits(movie, credits)
    }
}

/// Attach `cast` and `crew` from a credits document to a movie object.
///
/// Every field of `movie` is kept as-is. A credits field that is absent is
/// left out rather than written as `null`.
pub fn merge_credits(movie: Value, credits: Value) -> Result<Value> {
    let mut movie: Map<String, Value> = match movie {
        Value::Object(map) => map,
        other => {
            return Err(TmdbError::InvalidResponse(format!(
                "expected movie object, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut credits = match credits {
        Value::Object(map) => map,
        other => {
            return Err(TmdbError::InvalidResponse(format!(
                "expected credits object, got {}",
                json_kind(&other)
            )))
        }
    };

    for field in ["cast", "crew"] {
        if let Some(value) = credits.remove(field) {
            movie.insert(field.to_string(), value);
        }
    }

    Ok(Value::Object(movie))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
