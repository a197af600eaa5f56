//! Home page: this week's trending movies

use crate::app::{FetchState, RequestToken, RequestTracker};
use crate::models::MovieSummary;
use crate::source::MovieSource;
use crate::ui::card::card_grid;
use crate::ui::layout::{self, error_banner, section_heading, skeleton_grid};

/// Home view state
#[derive(Debug, Default)]
pub struct HomeView {
    movies: RequestTracker<Vec<MovieSummary>>,
}

impl HomeView {
    pub const ERROR_MESSAGE: &'static str = "Failed to fetch movies";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState<Vec<MovieSummary>> {
        self.movies.state()
    }

    pub fn begin(&mut self) -> RequestToken {
        self.movies.begin()
    }

    pub fn complete(&mut self, token: RequestToken, result: Result<Vec<MovieSummary>, String>) -> bool {
        self.movies.complete(token, result)
    }

    /// Fetch the trending list and apply it
    pub async fn load(&mut self, source: &dyn MovieSource) {
        let token = self.begin();
        let result = source.trending().await.map(|page| page.results).map_err(|e| {
            tracing::warn!(error = %e, "Trending fetch failed");
            Self::ERROR_MESSAGE.to_string()
        });
        self.complete(token, result);
    }

    /// Full page markup for the current state
    pub fn render(&self) -> String {
        let content = match self.movies.state() {
            FetchState::Idle | FetchState::Loading => skeleton_grid(),
            FetchState::Failed(msg) => error_banner(msg),
            FetchState::Loaded(movies) => card_grid(movies),
        };

        let body = format!(
            r#"<main><div class="hero"><div class="container"><h1>Discover Amazing Movies</h1><p>Explore trending films, search for your favorites, and dive deep into movie details</p></div></div><div class="container section">{}{}</div></main>"#,
            section_heading("Trending This Week"),
            content
        );
        layout::page("Trending", &body)
    }
}
