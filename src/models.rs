//! Data structures for CineMax
//!
//! Typed views of Provider (TMDB) movie data, organized by granularity:
//! - **List**: movie summaries and search result pages
//! - **Detail**: full movie record with genres, cast and crew
//!
//! The proxies relay raw JSON; these types are what the pages render from.
//! Every Provider field is optional on the wire, so missing or `null` values
//! decode to empty defaults instead of failing the whole record.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Image CDN base for Provider artwork
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Artwork served when the Provider has no poster/backdrop
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Number of cast members shown on the detail page
pub const TOP_CAST_LIMIT: usize = 6;

// =============================================================================
// List Models
// =============================================================================

/// One movie as shown in list views (trending, search results)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl MovieSummary {
    /// Poster URL at list size, or the placeholder
    pub fn poster_url(&self) -> String {
        image_url("w500", self.poster_path.as_deref())
    }

    /// Rating on the 0-5 display scale
    pub fn display_rating(&self) -> String {
        display_rating(self.vote_average)
    }

    /// Release year, if the date parses
    pub fn year(&self) -> Option<i32> {
        self.release_date.as_deref().and_then(release_year)
    }
}

impl fmt::Display for MovieSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year_str = self.year().map(|y| format!(" ({})", y)).unwrap_or_default();
        write!(f, "{}{} ★ {}", self.title, year_str, self.display_rating())
    }
}

/// One page of Provider list results (search or trending)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultPage {
    #[serde(default)]
    pub results: Vec<MovieSummary>,
    #[serde(default = "first_page", deserialize_with = "null_as_first_page")]
    pub page: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pages: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_results: u32,
}

impl SearchResultPage {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

// =============================================================================
// Detail Models
// =============================================================================

/// Genre tag attached to a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Actor credit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub character: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

impl CastMember {
    /// Headshot URL, only when the Provider has one
    pub fn profile_url(&self) -> Option<String> {
        self.profile_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("{}/w200{}", IMAGE_BASE_URL, p))
    }
}

/// Crew credit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// Full movie record: Provider movie object merged with its credits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub budget: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub revenue: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cast: Vec<CastMember>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub crew: Vec<CrewMember>,
}

impl MovieDetail {
    /// The list-granularity view of this movie
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            poster_path: self.poster_path.clone(),
            vote_average: self.vote_average,
            release_date: self.release_date.clone(),
            overview: self.overview.clone(),
        }
    }

    /// First crew member credited as "Director"
    pub fn director(&self) -> Option<&CrewMember> {
        self.crew.iter().find(|member| member.job == "Director")
    }

    /// Billing-order cast, capped at [`TOP_CAST_LIMIT`]
    pub fn top_cast(&self) -> &[CastMember] {
        let end = self.cast.len().min(TOP_CAST_LIMIT);
        &self.cast[..end]
    }

    pub fn poster_url(&self) -> String {
        image_url("w500", self.poster_path.as_deref())
    }

    pub fn backdrop_url(&self) -> String {
        image_url("original", self.backdrop_path.as_deref())
    }

    pub fn display_rating(&self) -> String {
        display_rating(self.vote_average)
    }

    pub fn display_release_date(&self) -> String {
        format_release_date(self.release_date.as_deref().unwrap_or_default())
    }

    pub fn display_budget(&self) -> String {
        format_currency(self.budget)
    }

    pub fn display_revenue(&self) -> String {
        format_currency(self.revenue)
    }
}

impl fmt::Display for MovieDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let runtime = self
            .runtime
            .map(|m| format!(" - {}h {}m", m / 60, m % 60))
            .unwrap_or_default();
        write!(f, "{}{} - ★ {}/5", self.title, runtime, self.display_rating())
    }
}

// =============================================================================
// Display Helpers
// =============================================================================

/// Halve a 0-10 Provider score onto the 0-5 star scale, one decimal
pub fn display_rating(vote_average: f64) -> String {
    format!("{:.1}", vote_average / 2.0)
}

/// Year of an ISO `YYYY-MM-DD` date
pub fn release_year(date: &str) -> Option<i32> {
    parse_date(date).map(|d| d.year())
}

/// Long en-US date, e.g. "July 16, 2010"
pub fn format_release_date(date: &str) -> String {
    match parse_date(date) {
        Some(d) => d.format("%B %-d, %Y").to_string(),
        None => "Unknown release date".to_string(),
    }
}

/// Money in millions, e.g. `$160.0M`; zero means unknown
pub fn format_currency(value: u64) -> String {
    if value == 0 {
        return "N/A".to_string();
    }
    format!("${:.1}M", value as f64 / 1_000_000.0)
}

/// Provider image URL at the given size, or the placeholder
pub fn image_url(size: &str, path: Option<&str>) -> String {
    match path {
        Some(p) if !p.is_empty() => format!("{}/{}{}", IMAGE_BASE_URL, size, p),
        _ => PLACEHOLDER_IMAGE.to_string(),
    }
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

fn first_page() -> u32 {
    1
}

// Provider sends explicit nulls for fields it has no value for
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_first_page<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(1))
}

// =============================================================================
// Tests
// =============================================================================
