use axum::http::HeaderValue;
use ptrib_model::settings::DEFAULT_SHEET;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:8080,http://127.0.0.1:8080";
const DEFAULT_MAX_UPLOAD_MB: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("invalid CORS origin '{0}'")]
    InvalidOrigin(String),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// Workbook sheet validated in every upload (default: `Produto`).
    pub sheet: String,
    /// Largest accepted request body, in bytes.
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var         | Default                                        |
    /// |-----------------|------------------------------------------------|
    /// | `HOST`          | `0.0.0.0`                                      |
    /// | `PORT`          | `3000`                                         |
    /// | `CORS_ORIGINS`  | `http://localhost:8080,http://127.0.0.1:8080`  |
    /// | `PTRIB_SHEET`   | `Produto`                                      |
    /// | `MAX_UPLOAD_MB` | `32`                                           |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.into());

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber {
                    name: "PORT",
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.into())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let sheet = lookup("PTRIB_SHEET")
            .filter(|sheet| !sheet.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SHEET.into());

        let max_upload_bytes = match lookup("MAX_UPLOAD_MB") {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|mb| mb.checked_mul(1024 * 1024))
                .ok_or(ConfigError::InvalidNumber {
                    name: "MAX_UPLOAD_MB",
                    value,
                })?,
            None => DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            sheet,
            max_upload_bytes,
        })
    }
}
