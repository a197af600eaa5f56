//! Server-rendered views
//!
//! Each page owns its fetch state and renders a complete HTML document.
//! Shared chrome lives in [`layout`], colors in [`Theme`].

pub mod theme;
pub mod layout;
pub mod card;
pub mod search;
pub mod home;
pub mod results;
pub mod detail;

pub use detail::DetailView;
pub use home::HomeView;
pub use results::{Pagination, SearchPageParams, SearchResultsView};
pub use search::SearchInput;
pub use theme::Theme;
