use crate::error::{Result, StargazerError};
use crate::github::{PageRequest, StarredSource};
use crate::ignore::IgnoreFilter;
use crate::limiter::RequestLimiter;
use crate::models::{FetchedStars, RateLimitWindow, Star, UNKNOWN_LANGUAGE};
use crate::rate_limit::RateLimitStore;
use crate::types::{LanguageConnection, LicenseInfo, StarredEdge};
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, error, info, warn};

pub const PAGE_SIZE: u32 = 50;
pub const LANGUAGE_COUNT: u32 = 1;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

/// Wait applied when a quota error arrives without any known reset time.
const RESET_FALLBACK: Duration = Duration::from_secs(60);
/// Slack added on top of a reported reset time.
const RESET_GRACE: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub login: String,
    /// Maximum requests per second.
    pub rate_limit: u32,
    pub page_size: u32,
    /// Budget for the whole fetch, including every wait.
    pub timeout: Duration,
}

impl FetchSettings {
    pub fn new(login: impl Into<String>, rate_limit: u32) -> Self {
        Self {
            login: login.into(),
            rate_limit,
            page_size: PAGE_SIZE,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Pages through a user's starred repositories and buckets them by language.
pub struct StarFetcher<S> {
    source: S,
    settings: FetchSettings,
    ignore: IgnoreFilter,
    store: RateLimitStore,
}

impl<S: StarredSource> StarFetcher<S> {
    pub fn new(source: S, settings: FetchSettings, ignore: IgnoreFilter, store: RateLimitStore) -> Self {
        Self {
            source,
            settings,
            ignore,
            store,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    /// Fetch every qualifying starred repository.
    ///
    /// Quota errors are waited out and the same page is retried. Any other
    /// failure, or running past the deadline, aborts the run and the
    /// repositories gathered so far are dropped.
    pub async fn fetch(&self) -> Result<FetchedStars> {
        let deadline = Instant::now() + self.settings.timeout;
        let mut limiter = RequestLimiter::per_second(self.settings.rate_limit);

        let mut window = match self.store.load() {
            Ok(window) => {
                debug!(
                    remaining = window.remaining,
                    reset_at = %window.reset_at,
                    "Loaded GitHub API rate limit info"
                );
                window
            }
            Err(e) => {
                warn!(error = %e, path = %self.store.path().display(), "Failed to load rate limit info, using default");
                RateLimitWindow::default()
            }
        };

        let mut request = PageRequest {
            login: self.settings.login.clone(),
            page_size: self.settings.page_size,
            language_count: LANGUAGE_COUNT,
            cursor: None,
        };
        let mut stars = FetchedStars::default();
        let mut pages = 0u32;

        loop {
            if let Err(e) = limiter.acquire(deadline).await {
                error!(error = %e, fetched = stars.total, "Request slot not available before deadline");
                return Err(e);
            }

            let page = match self.source.fetch_page(&request).await {
                Ok(page) => page,
                Err(e) if e.is_rate_limited() => {
                    let reset_at = e.reset_at().or_else(|| window.pending_reset(Utc::now()));
                    warn!(error = %e, reset_at = ?reset_at, "Rate limit reached, waiting before retry");
                    wait_for_reset(reset_at, deadline).await.map_err(|e| {
                        error!(error = %e, fetched = stars.total, "Rate limit reset lies beyond the deadline");
                        e
                    })?;
                    continue;
                }
                Err(e) => {
                    error!(error = %e, fetched = stars.total, "Failed to query GitHub API");
                    return Err(e);
                }
            };
            pages += 1;

            if let Some(rate) = &page.rate_limit {
                window = RateLimitWindow {
                    limit: rate.limit,
                    remaining: rate.remaining,
                    reset_at: rate.reset_at,
                };
                if let Err(e) = self.store.save(&window) {
                    warn!(error = %e, "Failed to save rate limit info");
                }
                debug!(
                    remaining = window.remaining,
                    reset_at = %window.reset_at,
                    "GitHub API rate limit status"
                );
            }

            for edge in page.edges {
                if edge.node.is_private || self.ignore.is_ignored(&edge.node.name_with_owner) {
                    debug!(repository = %edge.node.name_with_owner, "Skipping repository");
                    continue;
                }
                let (language, star) = normalize_edge(edge);
                stars.push(language, star);
            }

            if !page.page_info.has_next_page {
                break;
            }
            match page.page_info.end_cursor {
                Some(cursor) => request.cursor = Some(cursor),
                None => {
                    return Err(StargazerError::ApiError(
                        "next page reported without an end cursor".to_string(),
                    ))
                }
            }
        }

        info!(total_stars = stars.total, pages, "Successfully fetched starred repositories");
        Ok(stars)
    }
}

async fn wait_for_reset(reset_at: Option<DateTime<Utc>>, deadline: Instant) -> Result<()> {
    let wait = match reset_at {
        Some(reset_at) => (reset_at - Utc::now()).to_std().unwrap_or(Duration::ZERO) + RESET_GRACE,
        None => RESET_FALLBACK,
    };
    let wake = Instant::now() + wait;

    if wake > deadline {
        return Err(StargazerError::Timeout(format!(
            "rate limit resets in {}s, past the fetch deadline",
            wait.as_secs()
        )));
    }

    info!(wait_secs = wait.as_secs(), "Waiting for rate limit reset");
    sleep_until(wake).await;
    Ok(())
}

/// Convert one upstream edge into its language label and normalized record.
pub fn normalize_edge(edge: StarredEdge) -> (String, Star) {
    let node = edge.node;
    let language = determine_language(node.languages.as_ref());
    let license = determine_license(node.license_info.as_ref());
    let license_url = node
        .license_info
        .and_then(|info| info.url)
        .unwrap_or_default();

    let star = Star {
        url: node.url,
        name: node.name,
        full_name: node.name_with_owner,
        description: node.description.unwrap_or_default(),
        license,
        license_url,
        stars: node.stargazer_count,
        archived: node.is_archived,
        starred_at: edge.starred_at,
    };

    (language, star)
}

/// First language of the size-ranked list, or [`UNKNOWN_LANGUAGE`].
pub fn determine_language(languages: Option<&LanguageConnection>) -> String {
    match languages.and_then(|l| l.edges.first()) {
        Some(edge) if !edge.node.name.is_empty() => {
            debug!(language = %edge.node.name, "Determined repository language");
            edge.node.name.clone()
        }
        _ => {
            debug!("No language determined for repository");
            UNKNOWN_LANGUAGE.to_string()
        }
    }
}

/// Short license nickname if present, otherwise the full name.
///
/// A full name of "other" (any case) counts as no license.
pub fn determine_license(info: Option<&LicenseInfo>) -> String {
    let Some(info) = info else {
        return String::new();
    };

    let license = match info.nickname.as_deref() {
        Some(nickname) if !nickname.is_empty() => nickname.to_string(),
        _ if !info.name.is_empty() && !info.name.eq_ignore_ascii_case("other") => info.name.clone(),
        _ => String::new(),
    };

    if license.is_empty() {
        debug!("No license determined for repository");
    } else {
        debug!(license = %license, "Determined repository license");
    }
    license
}
