use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Language label used when the upstream reports no languages for a repository.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// A starred repository, normalized from the upstream response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub url: String,
    pub name: String,
    /// `owner/name`; the ignore-list match key and the sort key.
    pub full_name: String,
    pub description: String,
    /// Display name of the license, empty when none could be determined.
    pub license: String,
    pub license_url: String,
    pub stars: u32,
    pub archived: bool,
    pub starred_at: DateTime<Utc>,
}

/// Starred repositories bucketed by primary language.
pub type LanguageGroups = BTreeMap<String, Vec<Star>>;

/// Result of a complete fetch run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchedStars {
    pub groups: LanguageGroups,
    /// Number of repositories included across all groups.
    pub total: usize,
}

impl FetchedStars {
    /// Append a repository to the bucket for `language`.
    pub fn push(&mut self, language: impl Into<String>, star: Star) {
        self.groups.entry(language.into()).or_default().push(star);
        self.total += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Last observed remote quota window.
///
/// The default value is the zero window (no quota information, reset at the
/// Unix epoch) used when nothing has been persisted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitWindow {
    pub limit: u32,
    pub remaining: u32,
    pub reset_at: DateTime<Utc>,
}

impl RateLimitWindow {
    pub fn is_exhausted(&self) -> bool {
        self.limit > 0 && self.remaining == 0
    }

    /// Reset time, if it still lies ahead of `now`.
    pub fn pending_reset(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        (self.reset_at > now).then_some(self.reset_at)
    }
}
