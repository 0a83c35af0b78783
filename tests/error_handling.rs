use chrono::Utc;
use stargazer::error::{Result, StargazerError};
use std::error::Error;

#[test]
fn test_error_display() {
    let error = StargazerError::RateLimitExceeded {
        message: "Rate limit hit".to_string(),
        reset_at: None,
    };
    assert_eq!(format!("{}", error), "Rate limit exceeded: Rate limit hit");

    let error = StargazerError::NotFound("User not found".to_string());
    assert_eq!(format!("{}", error), "Resource not found: User not found");

    let error = StargazerError::ApiError("API failed".to_string());
    assert_eq!(format!("{}", error), "GitHub API error: API failed");

    let error = StargazerError::Timeout("deadline".to_string());
    assert_eq!(format!("{}", error), "Operation timed out: deadline");

    let error = StargazerError::ConfigError("missing token".to_string());
    assert_eq!(format!("{}", error), "Configuration error: missing token");
}

#[test]
fn test_error_source() {
    let error = StargazerError::ApiError("API failed".to_string());
    assert!(error.source().is_none());

    let error: StargazerError = std::io::Error::new(std::io::ErrorKind::Other, "disk").into();
    assert!(error.source().is_some());
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: StargazerError = io_error.into();
    assert!(matches!(error, StargazerError::IoError(_)));

    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: StargazerError = json_error.into();
    assert!(matches!(error, StargazerError::JsonError(_)));

    let url_error = url::Url::parse("not a url").unwrap_err();
    let error: StargazerError = url_error.into();
    assert!(matches!(error, StargazerError::InvalidUrl(_)));
}

#[test]
fn test_rate_limit_helpers() {
    let reset_at = Utc::now();
    let error = StargazerError::RateLimitExceeded {
        message: "API rate limit exceeded".to_string(),
        reset_at: Some(reset_at),
    };
    assert!(error.is_rate_limited());
    assert_eq!(error.reset_at(), Some(reset_at));

    let error = StargazerError::ApiError("API failed".to_string());
    assert!(!error.is_rate_limited());
    assert_eq!(error.reset_at(), None);
}

#[test]
fn test_result_type() {
    fn returns_result() -> Result<String> {
        Ok("success".to_string())
    }

    let result = returns_result();
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "success");

    fn returns_error() -> Result<String> {
        Err(StargazerError::NotFound("Not found".to_string()))
    }

    assert!(returns_error().is_err());
}
