//! CineMax - movie discovery backed by TMDB
//!
//! A small web app: trending movies, title search with pagination, and a
//! detail page per movie. Every Provider call is proxied through the
//! server so the API key never reaches the browser.
//!
//! # Modules
//!
//! - `api` - Provider client and a client for the server's own `/api`
//! - `proxy` - Search/Trending Proxy and Detail Aggregator
//! - `models` - Typed movie data and display helpers
//! - `source` - The data seam views fetch through
//! - `app` - Fetch state and request tokens
//! - `ui` - Server-rendered pages
//! - `server` - axum router, handlers, startup
//! - `config` / `cli` / `commands` - Configuration and the binary's CLI

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod proxy;
pub mod server;
pub mod source;
pub mod ui;

// Re-export commonly used types
pub use api::{LocalApiClient, TmdbClient, TmdbError};
pub use app::{FetchState, RequestToken, RequestTracker};
pub use config::Config;
pub use models::{CastMember, CrewMember, Genre, MovieDetail, MovieSummary, SearchResultPage};
pub use source::{MovieSource, SourceError};
