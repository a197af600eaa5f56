//! Configuration management for CineMax
//!
//! Settings are layered: CLI flags, then environment (`.env` included),
//! then the TOML config file, then defaults. The config file lives at
//! `~/.config/cinemax/config.toml` unless `--config` points elsewhere.

use serde::Deserialize;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::api::tmdb::DEFAULT_BASE_URL;
use crate::cli::Cli;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("TMDB API key is missing: set TMDB_API_KEY, pass --api-key, or add api_key to the config file")]
    MissingApiKey,

    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Invalid host: {0}")]
    InvalidHost(String),

    #[error("Invalid request timeout: {0}")]
    InvalidTimeout(String),

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of the TOML config file; every key optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub provider_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Parse a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolved server configuration
#[derive(Clone)]
pub struct Config {
    /// Provider API key; only ever sent to the Provider
    pub api_key: String,
    pub host: String,
    pub port: u16,
    /// Provider base URL
    pub provider_url: String,
    /// Timeout for each outbound Provider request
    pub request_timeout_secs: u64,
}

// Keeps the key out of logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("provider_url", &self.provider_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl Config {
    /// Default config file path (~/.config/cinemax/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cinemax").join("config.toml"))
    }

    /// Resolve from CLI flags and the process environment
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        Self::resolve_with(cli, |key| std::env::var(key).ok())
    }

    /// Resolve with an explicit environment lookup.
    ///
    /// An explicit `--config` file must exist; the default one is optional.
    pub fn resolve_with<F>(cli: &Cli, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => match Self::path().filter(|p| p.exists()) {
                Some(path) => FileConfig::load(&path)?,
                None => FileConfig::default(),
            },
        };

        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let api_key = cli
            .api_key
            .clone()
            .or_else(|| env("TMDB_API_KEY"))
            .or(file.api_key)
            .unwrap_or_default();

        let host = cli
            .host
            .clone()
            .or_else(|| env("HOST"))
            .or(file.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match (cli.port, env("PORT")) {
            (Some(port), _) => port,
            (None, Some(raw)) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            (None, None) => file.port.unwrap_or(DEFAULT_PORT),
        };

        let provider_url = cli
            .provider_url
            .clone()
            .or_else(|| env("TMDB_BASE_URL"))
            .or(file.provider_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let request_timeout_secs = match env("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?,
            None => file
                .request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let config = Self {
            api_key,
            host,
            port,
            provider_url,
            request_timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the server cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout("0".to_string()));
        }
        self.bind_addr()?;
        Ok(())
    }

    /// Socket address to listen on
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = match self.host.as_str() {
            "localhost" => IpAddr::from([127, 0, 0, 1]),
            host => host
                .parse()
                .map_err(|_| ConfigError::InvalidHost(self.host.clone()))?,
        };
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["cinemax"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_with_env_key() {
        let file = config_file("");
        let path = file.path().to_str().unwrap();
        let config =
            Config::resolve_with(&cli(&["--config", path]), env_of(&[("TMDB_API_KEY", "k")]))
                .unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.provider_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_missing_key_fails() {
        let file = config_file("");
        let path = file.path().to_str().unwrap();
        let err = Config::resolve_with(&cli(&["--config", path]), env_of(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn test_blank_key_fails() {
        let file = config_file("api_key = \"   \"");
        let path = file.path().to_str().unwrap();
        let err = Config::resolve_with(&cli(&["--config", path]), env_of(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn test_precedence_cli_env_file() {
        let file = config_file(
            "api_key = \"file-key\"\nhost = \"10.0.0.1\"\nport = 4000\nrequest_timeout_secs = 5\n",
        );
        let path = file.path().to_str().unwrap();

        let from_file = Config::resolve_with(&cli(&["--config", path]), env_of(&[])).unwrap();
        assert_eq!(from_file.api_key, "file-key");
        assert_eq!(from_file.host, "10.0.0.1");
        assert_eq!(from_file.port, 4000);
        assert_eq!(from_file.request_timeout_secs, 5);

        let env = env_of(&[("TMDB_API_KEY", "env-key"), ("PORT", "5000")]);
        let from_env = Config::resolve_with(&cli(&["--config", path]), env).unwrap();
        assert_eq!(from_env.api_key, "env-key");
        assert_eq!(from_env.port, 5000);

        let env = env_of(&[("TMDB_API_KEY", "env-key"), ("PORT", "5000")]);
        let from_cli = Config::resolve_with(
            &cli(&["--config", path, "--api-key", "cli-key", "--port", "6000"]),
            env,
        )
        .unwrap();
        assert_eq!(from_cli.api_key, "cli-key");
        assert_eq!(from_cli.port, 6000);
    }

    #[test]
    fn test_invalid_env_port() {
        let file = config_file("api_key = \"k\"");
        let path = file.path().to_str().unwrap();
        let err = Config::resolve_with(&cli(&["--config", path]), env_of(&[("PORT", "http")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(p) if p == "http"));
    }

    #[test]
    fn test_unparseable_file() {
        let file = config_file("port = \"not a number\"");
        let path = file.path().to_str().unwrap();
        let err = Config::resolve_with(&cli(&["--config", path]), env_of(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::resolve_with(
            &cli(&["--config", "/nonexistent/cinemax.toml"]),
            env_of(&[("TMDB_API_KEY", "k")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config {
            api_key: "secret".to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            provider_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 30,
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
        assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_invalid_host() {
        let config = Config {
            api_key: "k".to_string(),
            host: "not a host".to_string(),
            port: 1,
            provider_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 30,
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidHost(_))));
    }
}
