//! # Configuration
//!
//! Server settings read from environment variables at startup. A `.env`
//! file is loaded first by `main`, so local overrides can live there.
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DATABASE_URL` | SQLite connection string | `sqlite:splittrip.db` |
//! | `HOST` | Address the HTTP server binds to | `127.0.0.1` |
//! | `PORT` | HTTP server port | `5000` |
//! | `CORS_ORIGIN` | Origin allowed to call the API from a browser | `http://localhost:8080` |

use std::env;

use axum::http::HeaderValue;
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),

    #[error("Failed to parse {0}: {1}")]
    ParseError(String, String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Origin echoed in CORS responses
    pub cors_origin: HeaderValue,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = get_or_default("PORT", "5000");
        let port = port
            .parse()
            .map_err(|e| ConfigError::ParseError("PORT".to_string(), format!("{}", e)))?;

        let cors_origin = get_or_default("CORS_ORIGIN", "http://localhost:8080");
        let cors_origin = HeaderValue::from_str(&cors_origin)
            .map_err(|_| ConfigError::InvalidValue("CORS_ORIGIN".to_string(), cors_origin.clone()))?;

        Ok(Self {
            database_url: get_or_default("DATABASE_URL", "sqlite:splittrip.db"),
            host: get_or_default("HOST", "127.0.0.1"),
            port,
            cors_origin,
        })
    }

    /// `host:port` string for binding the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
