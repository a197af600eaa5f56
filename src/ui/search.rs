//! Search input component
//!
//! Holds the in-progress query text and turns a submit into a navigation
//! target. Rendered as a plain GET form so it also works without script.

use crate::ui::layout::escape;

/// Search input state
#[derive(Debug, Default, Clone)]
pub struct SearchInput {
    /// Current query text
    pub query: String,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Where submitting goes: `/search?q=...`, or nothing for blank text.
    ///
    /// Only blankness is checked; the untrimmed text is what gets sent.
    pub fn submit(&self) -> Option<String> {
        if self.query.trim().is_empty() {
            return None;
        }
        Some(format!("/search?q={}", urlencoding::encode(&self.query)))
    }

    /// Render the search form
    pub fn render(&self) -> String {
        format!(
            r#"<form class="search-form" action="/search" method="get" role="search"><input type="text" name="q" value="{}" placeholder="Search movies, actors, directors..." autocomplete="off" pattern=".*\S.*" required><button class="button" type="submit">Search</button></form>"#,
            escape(&self.query)
        )
    }
}
