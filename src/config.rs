use crate::error::{Result, StargazerError};
use crate::fetcher::FetchSettings;
use crate::github::API_URL;
use crate::ignore::IgnoreFilter;
use crate::rate_limit::{RateLimitStore, DEFAULT_RATE_LIMIT_FILE};
use crate::render::{OutputFormat, RenderOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::info;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "stargazer.yml";

/// Application settings, as stored in `stargazer.yml`.
///
/// Keys missing from the file keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub github_user: String,
    pub github_token: String,
    pub output_file: String,
    pub output_format: String,
    pub ignore_repos: Vec<String>,
    pub with_toc: bool,
    pub with_stars: bool,
    pub with_license: bool,
    pub with_back_to_top: bool,
    pub test: bool,
    /// API requests per second.
    pub rate_limit: u32,
    pub rate_limit_file: String,
    pub timeout_secs: u64,
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_user: String::new(),
            github_token: String::new(),
            output_file: "README.md".to_string(),
            output_format: "list".to_string(),
            ignore_repos: Vec::new(),
            with_toc: true,
            with_stars: true,
            with_license: true,
            with_back_to_top: false,
            test: false,
            rate_limit: 5,
            rate_limit_file: DEFAULT_RATE_LIMIT_FILE.to_string(),
            timeout_secs: 180,
            api_url: API_URL.to_string(),
        }
    }
}

impl Config {
    /// Load the config file, or the defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(filename = %path.display(), "Config file not found. Using default configuration.");
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&data)?;
        info!(filename = %path.display(), "Using config file");
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.test && self.github_token.trim().is_empty() {
            return Err(StargazerError::ConfigError(
                "GitHub token is required. Please provide a valid token.".to_string(),
            ));
        }
        if !self.test && self.github_user.trim().is_empty() {
            return Err(StargazerError::ConfigError(
                "GitHub user is required.".to_string(),
            ));
        }
        if self.rate_limit == 0 {
            return Err(StargazerError::ConfigError(
                "rate_limit must be at least 1 request per second".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(StargazerError::ConfigError(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        self.format()?;
        Url::parse(&self.api_url)?;
        Ok(())
    }

    pub fn format(&self) -> Result<OutputFormat> {
        self.output_format.parse()
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            with_toc: self.with_toc,
            with_license: self.with_license,
            with_stars: self.with_stars,
            with_back_to_top: self.with_back_to_top,
        }
    }

    pub fn ignore_filter(&self) -> IgnoreFilter {
        IgnoreFilter::new(&self.ignore_repos)
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings::new(self.github_user.clone(), self.rate_limit)
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }

    pub fn rate_limit_store(&self) -> RateLimitStore {
        RateLimitStore::new(&self.rate_limit_file)
    }
}
