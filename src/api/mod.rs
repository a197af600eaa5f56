//! API clients for external services
//!
//! - TMDB: movie metadata, search and credits (the Provider)
//! - Local: this server's own `/api` surface, for remote view rendering

pub mod local;
pub mod tmdb;

pub use local::LocalApiClient;
pub use tmdb::{TmdbClient, TmdbError};
