//! Movie card
//!
//! One movie in a list grid. Pure markup from a [`MovieSummary`]; the card
//! never fetches anything itself.

use crate::models::MovieSummary;
use crate::ui::layout::escape;

/// Render a card linking to the movie's detail page
pub fn movie_card(movie: &MovieSummary) -> String {
    let year = movie
        .year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let overview = movie
        .overview
        .as_deref()
        .filter(|o| !o.is_empty())
        .unwrap_or("No description available.");

    format!(
        r#"<a class="card" href="/movie/{id}"><div class="poster"><img src="{poster}" alt="{title}" loading="lazy"><div class="badge">{rating}</div></div><div class="body"><h3>{title}</h3><p class="year">{year}</p><p class="overview">{overview}</p><span class="button">View Details</span></div></a>"#,
        id = movie.id,
        poster = escape(&movie.poster_url()),
        title = escape(&movie.title),
        rating = movie.display_rating(),
        year = year,
        overview = escape(overview),
    )
}

/// Grid of cards in the given order
pub fn card_grid(movies: &[MovieSummary]) -> String {
    let mut html = String::from(r#"<div class="grid">"#);
    for movie in movies {
        html.push_str(&movie_card(movie));
    }
    html.push_str("</div>");
    html
}
