use crate::config::Config;
use crate::error::Result;
use crate::fetcher::StarFetcher;
use crate::github::{GitHubClient, StarredSource};
use crate::grouping::sort_groups;
use crate::models::FetchedStars;
use crate::render::write_list;
use crate::sample::SampleStars;
use async_trait::async_trait;
use std::path::Path;
use tracing::info;

/// Capability to produce the starred repositories of one run.
#[async_trait]
pub trait StarProvider: Send + Sync {
    async fn fetch_stars(&self) -> Result<FetchedStars>;
}

#[async_trait]
impl<S: StarredSource> StarProvider for StarFetcher<S> {
    async fn fetch_stars(&self) -> Result<FetchedStars> {
        self.fetch().await
    }
}

#[async_trait]
impl StarProvider for SampleStars {
    async fn fetch_stars(&self) -> Result<FetchedStars> {
        Ok(self.stars())
    }
}

/// Fetch from `provider` and sort every language bucket.
pub async fn collect_stars(provider: &dyn StarProvider) -> Result<FetchedStars> {
    let mut stars = provider.fetch_stars().await?;
    stars.groups = sort_groups(stars.groups);
    Ok(stars)
}

/// Build the provider the config asks for.
pub fn provider_for(config: &Config) -> Result<Box<dyn StarProvider>> {
    if config.test {
        info!("Using built-in sample data");
        return Ok(Box::new(SampleStars::new(config.ignore_filter())));
    }

    let client = GitHubClient::with_endpoint(config.github_token.clone(), &config.api_url)?;
    Ok(Box::new(StarFetcher::new(
        client,
        config.fetch_settings(),
        config.ignore_filter(),
        config.rate_limit_store(),
    )))
}

/// Fetch, sort, render and write the list described by `config`.
///
/// The output file is only written once every page has been fetched.
pub async fn generate(config: &Config) -> Result<FetchedStars> {
    config.validate()?;
    let provider = provider_for(config)?;
    generate_with(provider.as_ref(), config).await
}

pub async fn generate_with(provider: &dyn StarProvider, config: &Config) -> Result<FetchedStars> {
    let format = config.format()?;
    let stars = collect_stars(provider).await?;
    write_list(
        Path::new(&config.output_file),
        &stars,
        format,
        &config.render_options(),
    )?;
    Ok(stars)
}
