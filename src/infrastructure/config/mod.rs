use serde::Deserialize;
use std::env;

pub const DEFAULT_NEWS_API_BASE_URL: &str = "https://newsdata.io";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub news_api_key: String,
    pub news_api_base_url: String,
    pub news_language: String,
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set in environment")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

impl Config {
    /// Load configuration from `.env` (if present) and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let news_api_key = lookup("NEWS_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing("NEWS_API_KEY"))?;

        let config = Config {
            news_api_key,
            news_api_base_url: lookup("NEWS_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_NEWS_API_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            news_language: lookup("NEWS_LANGUAGE").unwrap_or_else(|| "en".to_string()),
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| "sqlite:news.db".to_string()),
            database_max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                lookup("DATABASE_MAX_CONNECTIONS"),
                5,
            )?,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or("PORT", lookup("PORT"), 8080)?,
            log_format: match lookup("LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        Ok(config)
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
