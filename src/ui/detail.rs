//! Detail view for a single movie
//!
//! Backdrop hero, poster, rating, facts, overview, money figures, director,
//! and the top-billed cast.

use crate::app::{FetchState, RequestToken, RequestTracker};
use crate::models::{CastMember, MovieDetail};
use crate::source::{MovieSource, SourceError};
use crate::ui::layout::{self, escape};

/// Detail view state
#[derive(Debug, Default)]
pub struct DetailView {
    /// Id from the `/movie/{id}` path
    pub movie_id: String,
    movie: RequestTracker<MovieDetail>,
}

impl DetailView {
    pub const ERROR_MESSAGE: &'static str = "Failed to fetch movie details";
    pub const NOT_FOUND_MESSAGE: &'static str = "Movie not found";

    pub fn new(movie_id: impl Into<String>) -> Self {
        Self {
            movie_id: movie_id.into(),
            movie: RequestTracker::new(),
        }
    }

    pub fn state(&self) -> &FetchState<MovieDetail> {
        self.movie.state()
    }

    /// Switch to another movie; any fetch for the previous id goes stale
    pub fn navigate(&mut self, movie_id: impl Into<String>) -> RequestToken {
        self.movie_id = movie_id.into();
        self.movie.begin()
    }

    pub fn complete(&mut self, token: RequestToken, result: Result<MovieDetail, String>) -> bool {
        self.movie.complete(token, result)
    }

    /// User-facing message for a failed fetch
    pub fn error_message(err: &SourceError) -> &'static str {
        match err {
            SourceError::Decode(_) => Self::NOT_FOUND_MESSAGE,
            _ => Self::ERROR_MESSAGE,
        }
    }

    pub async fn load(&mut self, source: &dyn MovieSource) {
        let token = self.movie.begin();
        let result = source.movie(&self.movie_id).await.map_err(|e| {
            tracing::warn!(movie_id = %self.movie_id, error = %e, "Movie detail fetch failed");
            Self::error_message(&e).to_string()
        });
        self.complete(token, result);
    }

    pub fn render(&self) -> String {
        match self.movie.state() {
            FetchState::Idle | FetchState::Loading => layout::page(
                "Loading",
                r#"<main class="center"><div class="spinner"></div><p>Loading movie details...</p></main>"#,
            ),
            FetchState::Failed(msg) => layout::page("Error", &render_error(msg)),
            FetchState::Loaded(movie) => layout::page(&movie.title, &render_movie(movie)),
        }
    }
}

fn render_error(message: &str) -> String {
    let message = if message.is_empty() {
        DetailView::NOT_FOUND_MESSAGE
    } else {
        message
    };
    format!(
        r#"<main class="center"><div class="error-banner"><h2>Error</h2><p>{}</p><a class="button" href="/">Back to Home</a></div></main>"#,
        escape(message)
    )
}

fn render_movie(movie: &MovieDetail) -> String {
    let title = escape(&movie.title);

    let runtime = movie
        .runtime
        .map(|m| format!("<span>{} minutes</span>", m))
        .unwrap_or_default();

    let genres: String = movie
        .genres
        .iter()
        .map(|g| format!(r#"<span class="chip">{}</span>"#, escape(&g.name)))
        .collect();

    let overview = movie
        .overview
        .as_deref()
        .filter(|o| !o.is_empty())
        .unwrap_or("No overview available.");

    let director = movie
        .director()
        .map(|d| {
            format!(
                r#"<div><h4>Director</h4><p>{}</p></div>"#,
                escape(&d.name)
            )
        })
        .unwrap_or_default();

    let cast = if movie.cast.is_empty() {
        String::new()
    } else {
        let members: String = movie.top_cast().iter().map(cast_member).collect();
        format!(
            r#"<section class="cast"><h2>Cast</h2><div class="bar"></div><div class="grid">{}</div></section>"#,
            members
        )
    };

    format!(
        r#"<main><div class="backdrop"><img src="{backdrop}" alt="{title}"></div><div class="container detail"><div class="poster"><img src="{poster}" alt="{title}"></div><div class="info"><h1>{title}</h1><div class="meta"><span class="rating">★ {rating}/5</span><span>{date}</span>{runtime}</div><div class="chips">{genres}</div><h2>Overview</h2><p>{overview}</p><div class="info-grid"><div><h4>Budget</h4><p>{budget}</p></div><div><h4>Revenue</h4><p>{revenue}</p></div>{director}</div></div></div><div class="container section">{cast}<a class="button" href="/">Back to Home</a></div></main>"#,
        backdrop = escape(&movie.backdrop_url()),
        poster = escape(&movie.poster_url()),
        title = title,
        rating = movie.display_rating(),
        date = escape(&movie.display_release_date()),
        runtime = runtime,
        genres = genres,
        overview = escape(overview),
        budget = movie.display_budget(),
        revenue = movie.display_revenue(),
        director = director,
        cast = cast,
    )
}

fn cast_member(member: &CastMember) -> String {
    let photo = member
        .profile_url()
        .map(|url| {
            format!(
                r#"<img src="{}" alt="{}" loading="lazy">"#,
                escape(&url),
                escape(&member.name)
            )
        })
        .unwrap_or_default();
    format!(
        r#"<div class="card">{}<div class="body"><h4>{}</h4><p class="character">{}</p></div></div>"#,
        photo,
        escape(&member.name),
        escape(&member.character)
    )
}
