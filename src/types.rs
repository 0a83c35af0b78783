use chrono::{DateTime, Utc};
use serde::Deserialize;

// GitHub GraphQL response structures

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarredData {
    pub rate_limit: Option<RawRateLimit>,
    pub user: Option<RawUser>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRateLimit {
    pub limit: u32,
    pub remaining: u32,
    pub reset_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUser {
    pub starred_repositories: StarredConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarredConnection {
    #[serde(default)]
    pub is_over_limit: bool,
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub edges: Vec<StarredEdge>,
    pub page_info: PageInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarredEdge {
    pub starred_at: DateTime<Utc>,
    pub node: RepositoryNode,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryNode {
    pub description: Option<String>,
    pub languages: Option<LanguageConnection>,
    pub license_info: Option<LicenseInfo>,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub is_private: bool,
    pub name: String,
    pub name_with_owner: String,
    #[serde(default)]
    pub stargazer_count: u32,
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageConnection {
    #[serde(default)]
    pub edges: Vec<LanguageEdge>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageEdge {
    pub node: LanguageNode,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageNode {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LicenseInfo {
    #[serde(default)]
    pub name: String,
    pub nickname: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

/// One page of starred repositories as reported by the upstream.
#[derive(Debug, Clone, Default)]
pub struct StarredPage {
    pub rate_limit: Option<RawRateLimit>,
    pub total_count: u32,
    pub edges: Vec<StarredEdge>,
    pub page_info: PageInfo,
}
