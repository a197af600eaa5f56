use std::sync::Arc;
use std::time::Duration;

use crate::api::TmdbClient;
use crate::config::Config;
use crate::source::MovieSource;

/// Shared application state available to all handlers via `State<AppState>`.
///
/// Cheap to clone: everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Provider client; holds the only copy of the API key
    pub tmdb: Arc<TmdbClient>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let tmdb = TmdbClient::with_timeout(
            config.api_key.clone(),
            config.provider_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        );
        Self {
            tmdb: Arc::new(tmdb),
            config: Arc::new(config),
        }
    }

    /// Data source the page views render from
    pub fn source(&self) -> &dyn MovieSource {
        self.tmdb.as_ref()
    }
}
