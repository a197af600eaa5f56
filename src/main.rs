//! CineMax - movie discovery backed by TMDB
//!
//! Serves the web app by default; `trending`, `search` and `movie`
//! subcommands query the Provider from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Start the server
//! TMDB_API_KEY=... cinemax --port 3000
//!
//! # CLI mode (for automation)
//! cinemax search "blade runner" --json
//! cinemax movie 78
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cinemax::api::TmdbClient;
use cinemax::cli::{Cli, Command, ExitCode, Output};
use cinemax::commands;
use cinemax::config::Config;
use cinemax::server;

#[tokio::main]
async fn main() -> Result<std::process::ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if cli.is_serve() {
        init_tracing(cli.log_json, "cinemax=debug,tower_http=debug");
        let config = Config::resolve(&cli).context("Invalid configuration")?;
        tracing::info!(?config, "Loaded configuration");
        server::serve(config).await?;
        Ok(ExitCode::Success.into())
    } else {
        init_tracing(cli.log_json, "cinemax=warn");
        Ok(run_cli(cli).await.into())
    }
}

/// Run a lookup subcommand and return its exit code
async fn run_cli(cli: Cli) -> ExitCode {
    let output = Output::new(&cli);

    let config = match Config::resolve(&cli) {
        Ok(config) => config,
        Err(e) => return output.error(e.to_string(), ExitCode::ConfigError),
    };
    let client = TmdbClient::with_timeout(
        config.api_key,
        config.provider_url,
        Duration::from_secs(config.request_timeout_secs),
    );

    match cli.command {
        Some(Command::Trending(cmd)) => commands::trending_cmd(cmd, &client, &output).await,
        Some(Command::Search(cmd)) => commands::search_cmd(cmd, &client, &output).await,
        Some(Command::Movie(cmd)) => commands::movie_cmd(cmd, &client, &output).await,
        Some(Command::Serve) | None => ExitCode::InvalidArgs,
    }
}

/// Logs go to stderr so stdout stays clean for command output
fn init_tracing(json: bool, default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let (plain, json) = if json {
        (None, Some(fmt::layer().json().with_writer(std::io::stderr)))
    } else {
        (Some(fmt::layer().with_writer(std::io::stderr)), None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(plain)
        .with(json)
        .init();
}
