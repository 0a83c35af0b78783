//! Builds "awesome lists" of a user's starred GitHub repositories.
//!
//! Stars are fetched page by page from the GitHub GraphQL API, grouped by
//! primary language, sorted and rendered to Markdown.

pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod github;
pub mod grouping;
pub mod ignore;
pub mod limiter;
pub mod models;
pub mod pipeline;
pub mod rate_limit;
pub mod render;
pub mod sample;
pub mod types;
