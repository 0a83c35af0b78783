use crate::error::{Result, StargazerError};
use crate::types::{GraphQlError, GraphQlResponse, StarredData, StarredPage};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use serde_json::json;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const API_URL: &str = "https://api.github.com/graphql";

const STARRED_QUERY: &str = r#"
query($login: String!, $count: Int!, $lc: Int!, $cursor: String) {
  rateLimit {
    limit
    remaining
    resetAt
  }
  user(login: $login) {
    starredRepositories(first: $count, orderBy: {field: STARRED_AT, direction: DESC}, after: $cursor) {
      isOverLimit
      totalCount
      edges {
        starredAt
        node {
          description
          languages(first: $lc, orderBy: {field: SIZE, direction: DESC}) {
            edges {
              node {
                name
              }
            }
          }
          licenseInfo {
            name
            nickname
            url
          }
          isArchived
          isPrivate
          name
          nameWithOwner
          stargazerCount
          url
        }
      }
      pageInfo {
        endCursor
        hasNextPage
      }
    }
  }
}
"#;

/// Parameters for one page of the starred-repositories query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub login: String,
    pub page_size: u32,
    /// Number of languages requested per repository, largest first.
    pub language_count: u32,
    /// `None` starts at the beginning of the list.
    pub cursor: Option<String>,
}

/// Anything that can serve pages of a user's starred repositories.
///
/// Implementations report an exhausted quota as
/// [`StargazerError::RateLimitExceeded`] so the caller can wait and retry.
#[async_trait]
pub trait StarredSource: Send + Sync {
    async fn fetch_page(&self, request: &PageRequest) -> Result<StarredPage>;
}

pub struct GitHubClient {
    client: Client,
    token: String,
    endpoint: Url,
}

impl GitHubClient {
    pub fn new(token: String) -> Result<Self> {
        Self::with_endpoint(token, API_URL)
    }

    pub fn with_endpoint(token: String, endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        let client = Client::builder()
            .user_agent(concat!("stargazer/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient {
            client,
            token,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl StarredSource for GitHubClient {
    async fn fetch_page(&self, request: &PageRequest) -> Result<StarredPage> {
        let body = json!({
            "query": STARRED_QUERY,
            "variables": {
                "login": request.login,
                "count": request.page_size,
                "lc": request.language_count,
                "cursor": request.cursor,
            }
        });

        debug!(login = %request.login, cursor = ?request.cursor, "Querying starred repositories");

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        let remaining: Option<u32> = header_value(response.headers(), "X-RateLimit-Remaining");
        let reset_at = reset_from_headers(response.headers());

        match response.status() {
            StatusCode::OK => {
                let payload: GraphQlResponse<StarredData> = response.json().await?;
                page_from_response(payload, &request.login, reset_at)
            }
            StatusCode::UNAUTHORIZED => Err(StargazerError::AuthError(
                "GitHub rejected the access token".to_string(),
            )),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
                let error_text = response.text().await.unwrap_or_default();
                if remaining == Some(0) || error_text.to_lowercase().contains("rate limit") {
                    Err(StargazerError::RateLimitExceeded {
                        message: error_text,
                        reset_at,
                    })
                } else {
                    Err(StargazerError::ApiError(format!("Forbidden: {}", error_text)))
                }
            }
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(StargazerError::ApiError(format!(
                    "API request failed with status {}: {}",
                    status, error_text
                )))
            }
        }
    }
}

/// Translate a decoded GraphQL payload into a page or a typed error.
///
/// `reset_hint` is the quota reset reported out of band (response headers);
/// it is attached to rate-limit errors when the payload itself carries none.
pub fn page_from_response(
    response: GraphQlResponse<StarredData>,
    login: &str,
    reset_hint: Option<DateTime<Utc>>,
) -> Result<StarredPage> {
    let GraphQlResponse { data, errors } = response;

    if !errors.is_empty() {
        let message = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");

        if errors.iter().any(is_rate_limit_error) {
            let reset_at = data
                .as_ref()
                .and_then(|d| d.rate_limit.as_ref())
                .map(|r| r.reset_at)
                .or(reset_hint);
            return Err(StargazerError::RateLimitExceeded { message, reset_at });
        }
        if errors.iter().any(|e| e.kind.as_deref() == Some("NOT_FOUND")) {
            return Err(StargazerError::NotFound(message));
        }
        return Err(StargazerError::ApiError(message));
    }

    let data =
        data.ok_or_else(|| StargazerError::ApiError("response contained no data".to_string()))?;
    let user = data
        .user
        .ok_or_else(|| StargazerError::NotFound(format!("GitHub user '{}'", login)))?;
    let starred = user.starred_repositories;

    Ok(StarredPage {
        rate_limit: data.rate_limit,
        total_count: starred.total_count,
        edges: starred.edges,
        page_info: starred.page_info,
    })
}

fn is_rate_limit_error(error: &GraphQlError) -> bool {
    error.kind.as_deref() == Some("RATE_LIMITED")
        || error.message.to_lowercase().contains("api rate limit exceeded")
}

fn header_value<T: FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse::<T>().ok())
}

fn reset_from_headers(headers: &HeaderMap) -> Option<DateTime<Utc>> {
    header_value::<i64>(headers, "X-RateLimit-Reset")
        .and_then(|timestamp| DateTime::from_timestamp(timestamp, 0))
}
