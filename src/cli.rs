use crate::config::{Config, DEFAULT_CONFIG_FILE};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stargazer")]
#[command(about = "Creates awesome lists of your starred GitHub repositories")]
#[command(version)]
pub struct Cli {
    /// YAML config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the starred repositories list
    Generate(GenerateArgs),
}

/// Overrides for values from the config file. Unset flags keep the file's value.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// The file to create
    #[arg(short = 'o', long, env = "OUTPUT_FILE")]
    pub output_file: Option<String>,

    /// The format of the output [list, table]
    #[arg(short = 'f', long, env = "OUTPUT_FORMAT")]
    pub output_format: Option<String>,

    /// GitHub user name
    #[arg(short = 'u', long, env = "GITHUB_USER")]
    pub github_user: Option<String>,

    /// GitHub access token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Number of API requests per second
    #[arg(long, env = "RATE_LIMIT")]
    pub rate_limit: Option<u32>,

    /// Repositories to ignore (flag can be specified multiple times)
    #[arg(short = 'i', long = "ignore", env = "IGNORE_REPOS", value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Just put out some test data
    #[arg(short = 't', long)]
    pub test: bool,

    /// Print table of contents
    #[arg(long, env = "WITH_TOC", num_args = 0..=1, default_missing_value = "true")]
    pub with_toc: Option<bool>,

    /// Print star count of repositories
    #[arg(long, env = "WITH_STARS", num_args = 0..=1, default_missing_value = "true")]
    pub with_stars: Option<bool>,

    /// Print license of repositories
    #[arg(long, env = "WITH_LICENSE", num_args = 0..=1, default_missing_value = "true")]
    pub with_license: Option<bool>,

    /// Generate 'back to top' links for each language
    #[arg(long, env = "WITH_BACK_TO_TOP", num_args = 0..=1, default_missing_value = "true")]
    pub with_back_to_top: Option<bool>,

    /// Overall time budget for fetching, in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Where the last seen API quota is kept between runs
    #[arg(long)]
    pub rate_limit_file: Option<String>,
}

impl GenerateArgs {
    /// Layer flags and environment values over `config`.
    pub fn apply_to(&self, config: &mut Config) {
        fn set<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *target = v.clone();
            }
        }

        set(&mut config.output_file, &self.output_file);
        set(&mut config.output_format, &self.output_format);
        set(&mut config.github_user, &self.github_user);
        set(&mut config.github_token, &self.github_token);
        set(&mut config.rate_limit, &self.rate_limit);
        set(&mut config.with_toc, &self.with_toc);
        set(&mut config.with_stars, &self.with_stars);
        set(&mut config.with_license, &self.with_license);
        set(&mut config.with_back_to_top, &self.with_back_to_top);
        set(&mut config.timeout_secs, &self.timeout_secs);
        set(&mut config.rate_limit_file, &self.rate_limit_file);

        let ignore: Vec<String> = self
            .ignore
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if !ignore.is_empty() {
            config.ignore_repos = ignore;
        }
        if self.test {
            config.test = true;
        }
    }
}
