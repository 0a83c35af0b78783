#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use stargazer::error::{Result, StargazerError};
use stargazer::github::{PageRequest, StarredSource};
use stargazer::models::Star;
use stargazer::types::{
    LanguageConnection, LanguageEdge, LanguageNode, LicenseInfo, PageInfo, RawRateLimit,
    RepositoryNode, StarredEdge, StarredPage,
};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Page source that replays a fixed script of responses and records every
/// request it receives.
pub struct ScriptedSource {
    responses: Mutex<VecDeque<Result<StarredPage>>>,
    requests: Mutex<Vec<PageRequest>>,
}

impl ScriptedSource {
    pub fn new(responses: Vec<Result<StarredPage>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn cursors(&self) -> Vec<Option<String>> {
        self.requests().into_iter().map(|r| r.cursor).collect()
    }
}

#[async_trait]
impl StarredSource for ScriptedSource {
    async fn fetch_page(&self, request: &PageRequest) -> Result<StarredPage> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(StargazerError::ApiError("script exhausted".to_string())))
    }
}

pub fn edge(full_name: &str, language: Option<&str>) -> StarredEdge {
    let name = full_name.rsplit('/').next().unwrap().to_string();
    StarredEdge {
        starred_at: Utc::now(),
        node: RepositoryNode {
            description: Some(format!("{} description", name)),
            languages: Some(LanguageConnection {
                edges: language
                    .map(|l| {
                        vec![LanguageEdge {
                            node: LanguageNode { name: l.to_string() },
                        }]
                    })
                    .unwrap_or_default(),
            }),
            license_info: Some(LicenseInfo {
                name: "MIT License".to_string(),
                nickname: None,
                url: Some("https://api.github.com/licenses/mit".to_string()),
            }),
            is_archived: false,
            is_private: false,
            name,
            name_with_owner: full_name.to_string(),
            stargazer_count: 42,
            url: format!("https://github.com/{}", full_name),
        },
    }
}

pub fn private_edge(full_name: &str, language: Option<&str>) -> StarredEdge {
    let mut e = edge(full_name, language);
    e.node.is_private = true;
    e
}

pub fn page(edges: Vec<StarredEdge>, next_cursor: Option<&str>) -> StarredPage {
    StarredPage {
        rate_limit: Some(RawRateLimit {
            limit: 5000,
            remaining: 4999,
            reset_at: reset_in(3600),
        }),
        total_count: edges.len() as u32,
        edges,
        page_info: PageInfo {
            end_cursor: next_cursor.map(str::to_string),
            has_next_page: next_cursor.is_some(),
        },
    }
}

pub fn rate_limited(reset_at: Option<DateTime<Utc>>) -> StargazerError {
    StargazerError::RateLimitExceeded {
        message: "API rate limit exceeded for user".to_string(),
        reset_at,
    }
}

pub fn reset_in(secs: i64) -> DateTime<Utc> {
    // Whole seconds, so values survive a JSON round trip unchanged.
    DateTime::from_timestamp(Utc::now().timestamp() + secs, 0).unwrap()
}

pub fn star(full_name: &str) -> Star {
    Star {
        url: format!("https://github.com/{}", full_name),
        name: full_name.rsplit('/').next().unwrap().to_string(),
        full_name: full_name.to_string(),
        description: String::new(),
        license: String::new(),
        license_url: String::new(),
        stars: 1,
        archived: false,
        starred_at: Utc::now() - Duration::days(1),
    }
}
