//! CLI Command Handlers
//!
//! The lookup subcommands. Each handler takes its args, a data source and
//! the Output, and returns an ExitCode.

use std::fmt::Write;

use crate::cli::{ExitCode, MovieCmd, Output, SearchCmd, TrendingCmd};
use crate::models::{MovieDetail, MovieSummary};
use crate::source::{MovieSource, SourceError};

fn exit_code_for(err: &SourceError) -> ExitCode {
    match err {
        SourceError::Rejected(_) => ExitCode::InvalidArgs,
        _ => ExitCode::NetworkError,
    }
}

/// One line per movie: `[id] Title (Year) ★ 4.2`
pub fn summary_lines(movies: &[MovieSummary]) -> String {
    let mut out = String::new();
    for movie in movies {
        let _ = writeln!(out, "[{}] {}", movie.id, movie);
    }
    out.trim_end().to_string()
}

/// Multi-line movie description for terminals
pub fn detail_text(movie: &MovieDetail) -> String {
    let mut out = movie.to_string();
    let _ = write!(out, "\nReleased: {}", movie.display_release_date());
    if !movie.genres.is_empty() {
        let genres: Vec<&str> = movie.genres.iter().map(|g| g.name.as_str()).collect();
        let _ = write!(out, "\nGenres: {}", genres.join(", "));
    }
    if let Some(director) = movie.director() {
        let _ = write!(out, "\nDirector: {}", director.name);
    }
    let _ = write!(
        out,
        "\nBudget: {}  Revenue: {}",
        movie.display_budget(),
        movie.display_revenue()
    );
    if let Some(overview) = movie.overview.as_deref().filter(|o| !o.is_empty()) {
        let _ = write!(out, "\n\n{}", overview);
    }
    if !movie.cast.is_empty() {
        out.push_str("\n\nCast:");
        for member in movie.top_cast() {
            let _ = write!(out, "\n  {} as {}", member.name, member.character);
        }
    }
    out
}

// =============================================================================
// Trending Command
// =============================================================================

pub async fn trending_cmd(cmd: TrendingCmd, source: &dyn MovieSource, output: &Output) -> ExitCode {
    output.info("Fetching trending movies...");

    match source.trending().await {
        Ok(page) => {
            let mut movies = page.results;
            movies.truncate(cmd.limit);

            if let Err(e) = output.print(&movies, || summary_lines(&movies)) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => output.error(format!("Trending fetch failed: {}", e), exit_code_for(&e)),
    }
}

// =============================================================================
// Search Command
// =============================================================================

pub async fn search_cmd(cmd: SearchCmd, source: &dyn MovieSource, output: &Output) -> ExitCode {
    output.info(format!("Searching for: {}", cmd.query));

    match source.search(&cmd.query, &cmd.page).await {
        Ok(mut page) => {
            page.results.truncate(cmd.limit);

            let human = || {
                format!(
                    "{}\nPage {} of {} ({} results)",
                    summary_lines(&page.results),
                    page.page,
                    page.total_pages,
                    page.total_results
                )
            };
            if let Err(e) = output.print(&page, human) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => output.error(format!("Search failed: {}", e), exit_code_for(&e)),
    }
}

// =============================================================================
// Movie Command
// =============================================================================

pub async fn movie_cmd(cmd: MovieCmd, source: &dyn MovieSource, output: &Output) -> ExitCode {
    output.info(format!("Getting movie: {}", cmd.id));

    match source.movie(&cmd.id).await {
        Ok(movie) => {
            if let Err(e) = output.print(&movie, || detail_text(&movie)) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => output.error(format!("Movie lookup failed: {}", e), exit_code_for(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CastMember, CrewMember, Genre};

    fn movie(id: u64, title: &str, date: &str) -> MovieSummary {
        MovieSummary {
            id,
            title: title.to_string(),
            poster_path: None,
            vote_average: 8.0,
            release_date: Some(date.to_string()),
            overview: None,
        }
    }

    #[test]
    fn test_summary_lines() {
        let text = summary_lines(&[movie(1, "Dune", "2021-09-15"), movie(2, "Alien", "")]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[1] Dune"));
        assert!(lines[1].starts_with("[2] Alien"));
    }

    #[test]
    fn test_detail_text() {
        let detail = MovieDetail {
            id: 1,
            title: "Dune".to_string(),
            poster_path: None,
            backdrop_path: None,
            vote_average: 8.0,
            release_date: Some("2021-09-15".to_string()),
            overview: Some("Spice.".to_string()),
            runtime: Some(155),
            budget: 165_000_000,
            revenue: 0,
            genres: vec![Genre {
                id: 878,
                name: "Science Fiction".to_string(),
            }],
            cast: vec![CastMember {
                id: 2,
                name: "Timothée Chalamet".to_string(),
                character: "Paul Atreides".to_string(),
                profile_path: None,
            }],
            crew: vec![CrewMember {
                id: 3,
                name: "Denis Villeneuve".to_string(),
                job: "Director".to_string(),
                department: None,
                profile_path: None,
            }],
        };
        let text = detail_text(&detail);
        assert!(text.starts_with("Dune - 2h 35m - ★ 4.0/5"));
        assert!(text.contains("Released: September 15, 2021"));
        assert!(text.contains("Genres: Science Fiction"));
        assert!(text.contains("Director: Denis Villeneuve"));
        assert!(text.contains("Budget: $165.0M  Revenue: N/A"));
        assert!(text.contains("Timothée Chalamet as Paul Atreides"));
    }

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(
            exit_code_for(&SourceError::Rejected("Query parameter is required".into())),
            ExitCode::InvalidArgs
        );
        assert_eq!(exit_code_for(&SourceError::Status(500)), ExitCode::NetworkError);
    }
}
