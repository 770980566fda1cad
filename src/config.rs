use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_PLAYERS_FILE: &str = "./players.json";
pub const DEFAULT_PLAYERS_API_URL: &str = "http://localhost:4000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HOST is not in the correct format: {0}")]
    Host(String),
    #[error("PORT is not the correct format: {0}")]
    Port(String),
}

/// Server and loader settings, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: Ipv4Addr,
    pub port: u16,
    pub players_file: PathBuf,
    pub players_api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED,
            port: DEFAULT_PORT,
            players_file: PathBuf::from(DEFAULT_PLAYERS_FILE),
            players_api_url: DEFAULT_PLAYERS_API_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let host: Ipv4Addr = match lookup("HOST") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Host(raw))?,
            None => defaults.host,
        };

        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Port(raw))?,
            None => defaults.port,
        };

        Ok(Self {
            host,
            port,
            players_file: lookup("PLAYERS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.players_file),
            players_api_url: lookup("PLAYERS_API_URL").unwrap_or(defaults.players_api_url),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}
