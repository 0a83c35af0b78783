use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StargazerError {
    #[error("GitHub API error: {0}")]
    ApiError(String),

    #[error("Rate limit exceeded: {message}")]
    RateLimitExceeded {
        message: String,
        reset_at: Option<DateTime<Utc>>,
    },

    #[error("Operation timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl StargazerError {
    /// True when the upstream reported an exhausted quota window.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, StargazerError::RateLimitExceeded { .. })
    }

    /// Reset time carried by a quota error, if the upstream reported one.
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        match self {
            StargazerError::RateLimitExceeded { reset_at, .. } => *reset_at,
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StargazerError>;
