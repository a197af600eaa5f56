//! Search results page
//!
//! The URL is the only source of truth: `q` and `page` come from the query
//! string and every navigation issues a new fetch against the Search Proxy.
//! Previous/Next are plain links that rewrite `page`.

use serde::Deserialize;

use crate::app::{FetchState, RequestToken, RequestTracker};
use crate::models::SearchResultPage;
use crate::proxy::DEFAULT_PAGE;
use crate::source::{self, MovieSource};
use crate::ui::card::card_grid;
use crate::ui::layout::{self, error_banner, escape, section_heading, skeleton_grid};
use crate::ui::search::SearchInput;

/// Query string of the `/search` page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPageParams {
    pub q: Option<String>,
    pub page: Option<String>,
}

// =============================================================================
// Pagination
// =============================================================================

/// Previous/Next control state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    /// Controls only appear when there is more than one page
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn previous_page(&self) -> Option<u32> {
        self.has_previous().then(|| self.current_page - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        self.has_next().then(|| self.current_page + 1)
    }
}

// =============================================================================
// Results View
// =============================================================================

/// Search results view state
#[derive(Debug, Default)]
pub struct SearchResultsView {
    query: Option<String>,
    page: String,
    results: RequestTracker<SearchResultPage>,
}

impl SearchResultsView {
    pub const ERROR_MESSAGE: &'static str = "Failed to fetch search results";

    pub fn new() -> Self {
        Self {
            page: DEFAULT_PAGE.to_string(),
            ..Self::default()
        }
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn state(&self) -> &FetchState<SearchResultPage> {
        self.results.state()
    }

    /// Move to the URL's `q`/`page`.
    ///
    /// Returns the token of the fetch this navigation requires, or `None`
    /// when there is no query (the view goes back to its prompt).
    pub fn navigate(&mut self, params: &SearchPageParams) -> Option<RequestToken> {
        self.query = params.q.clone().filter(|q| !q.is_empty());
        self.page = params
            .page
            .clone()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PAGE.to_string());

        if self.query.is_none() {
            self.results.reset();
            return None;
        }
        Some(self.results.begin())
    }

    /// `/api/search` path for the current navigation
    pub fn fetch_path(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(|q| source::search_path(q, &self.page))
    }

    pub fn complete(&mut self, token: RequestToken, result: Result<SearchResultPage, String>) -> bool {
        self.results.complete(token, result)
    }

    /// Navigate, fetch through `source`, apply
    pub async fn load(&mut self, params: &SearchPageParams, source: &dyn MovieSource) {
        let Some(token) = self.navigate(params) else {
            return;
        };
        let Some(query) = self.query.clone() else {
            return;
        };

        let result = source.search(&query, &self.page).await.map_err(|e| {
            tracing::warn!(query = %query, page = %self.page, error = %e, "Search fetch failed");
            Self::ERROR_MESSAGE.to_string()
        });
        self.complete(token, result);
    }

    /// Page shown in the controls: the Provider's answer once loaded,
    /// otherwise the URL's page (1 when not numeric)
    pub fn current_page(&self) -> u32 {
        match self.results.state() {
            FetchState::Loaded(data) => data.page,
            _ => self.page.parse().unwrap_or(1),
        }
    }

    pub fn total_pages(&self) -> u32 {
        self.results
            .state()
            .data()
            .map(|data| data.total_pages)
            .unwrap_or(0)
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.current_page(), self.total_pages())
    }

    /// Link for a page of the current query
    pub fn page_href(&self, page: u32) -> String {
        format!(
            "/search?q={}&page={}",
            urlencoding::encode(self.query.as_deref().unwrap_or_default()),
            page
        )
    }

    /// Full page markup for the current state
    pub fn render(&self) -> String {
        let input = SearchInput::with_query(self.query.as_deref().unwrap_or_default());
        let results = match self.query.as_deref() {
            None => r#"<div class="empty"><h2>Start Searching for Movies</h2><p>Use the search bar above to find movies by title</p></div>"#.to_string(),
            Some(query) => self.render_results(query),
        };

        let body = format!(
            r#"<main><div class="search-bar"><div class="container">{}</div></div><div class="container section">{}</div></main>"#,
            input.render(),
            results
        );

        let title = match self.query.as_deref() {
            Some(q) => format!("Search: {}", q),
            None => "Search".to_string(),
        };
        layout::page(&title, &body)
    }

    fn render_results(&self, query: &str) -> String {
        let heading = section_heading(&format!("Search Results for \"{}\"", query));

        match self.results.state() {
            FetchState::Idle | FetchState::Loading => format!(
                r#"{}<p class="status">Loading...</p>{}"#,
                heading,
                skeleton_grid()
            ),
            FetchState::Failed(msg) => format!("{}{}", heading, error_banner(msg)),
            FetchState::Loaded(data) if data.is_empty() => format!(
                r#"{}<p class="status">Found 0 results</p><div class="empty"><h3>No movies found</h3><p>Try searching with different keywords</p></div>"#,
                heading
            ),
            FetchState::Loaded(data) => format!(
                r#"{}<p class="status">Found {} results</p>{}{}"#,
                heading,
                data.results.len(),
                card_grid(&data.results),
                self.render_pagination()
            ),
        }
    }

    fn render_pagination(&self) -> String {
        let pagination = self.pagination();
        if !pagination.is_visible() {
            return String::new();
        }

        let control = |label: &str, target: Option<u32>| match target {
            Some(page) => format!(
                r#"<a class="button" href="{}">{}</a>"#,
                escape(&self.page_href(page)),
                label
            ),
            None => format!(
                r#"<span class="button disabled" aria-disabled="true">{}</span>"#,
                label
            ),
        };

        format!(
            r#"<nav class="pagination">{}<span>Page {} of {}</span>{}</nav>"#,
            control("Previous", pagination.previous_page()),
            pagination.current_page,
            pagination.total_pages,
            control("Next", pagination.next_page()),
        )
    }
}
