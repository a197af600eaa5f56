//! CLI - Command Line Interface for CineMax
//!
//! With no subcommand (or `serve`) the binary runs the web server. The
//! lookup subcommands query the Provider directly and print the result,
//! as JSON when `--json` is set or stdout is not a terminal.
//!
//! # Examples
//!
//! ```bash
//! # Run the server on port 8080
//! cinemax --port 8080
//!
//! # Scriptable lookups
//! cinemax trending --limit 5
//! cinemax search "the batman" --page 2 --json
//! cinemax movie 27205
//! ```

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::IsTerminal;
use std::path::PathBuf;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Provider unreachable or returned an error
    NetworkError = 3,
    /// Configuration could not be resolved
    ConfigError = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// CineMax - movie discovery backed by TMDB
#[derive(Parser, Debug, Default)]
#[command(
    name = "cinemax",
    version,
    about = "Movie discovery web app backed by TMDB",
    long_about = "Serves trending movies, title search, and movie detail pages, \
                  proxying every Provider call so the API key stays on the server.\n\n\
                  Run without a subcommand to start the server.",
    after_help = "EXAMPLES:\n\
                  cinemax                             Start the server on 0.0.0.0:3000\n\
                  cinemax --port 8080 --log-json      Custom port, JSON logs\n\
                  cinemax search \"blade runner\"       Search from the terminal\n\
                  cinemax movie 27205 --json          Movie with cast and crew"
)]
pub struct Cli {
    /// Address to bind
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Port to bind
    #[arg(long, short = 'p', global = true)]
    pub port: Option<u16>,

    /// TMDB API key (overrides TMDB_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Provider base URL
    #[arg(long, global = true)]
    pub provider_url: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Subcommand to run (omit to serve)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Whether this invocation runs the web server
    pub fn is_serve(&self) -> bool {
        matches!(self.command, None | Some(Command::Serve))
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the web server (default)
    Serve,

    /// This week's trending movies
    #[command(visible_alias = "tr")]
    Trending(TrendingCmd),

    /// Search movies by title
    #[command(visible_alias = "s")]
    Search(SearchCmd),

    /// Movie details with cast and crew
    #[command(visible_alias = "i")]
    Movie(MovieCmd),
}

/// List this week's trending movies
#[derive(Args, Debug, Clone)]
pub struct TrendingCmd {
    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,
}

/// Search for movies by title
#[derive(Args, Debug, Clone)]
pub struct SearchCmd {
    /// Search query
    #[arg(required = true)]
    pub query: String,

    /// Result page (1-based)
    #[arg(long, default_value = "1")]
    pub page: String,

    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,
}

/// Fetch one movie
#[derive(Args, Debug, Clone)]
pub struct MovieCmd {
    /// Provider movie id
    #[arg(required = true)]
    pub id: String,
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Envelope for `--json` output
#[derive(Debug, Serialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Format success data: the JSON envelope, or `human` for terminals
    pub fn render<T: Serialize>(&self, data: &T, human: impl FnOnce() -> String) -> anyhow::Result<String> {
        if self.json {
            Ok(serde_json::to_string_pretty(&JsonOutput::success(data))?)
        } else {
            Ok(human())
        }
    }

    /// Print success data
    pub fn print<T: Serialize>(&self, data: &T, human: impl FnOnce() -> String) -> anyhow::Result<()> {
        println!("{}", self.render(data, human)?);
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
