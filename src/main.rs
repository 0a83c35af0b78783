use anyhow::Context;
use clap::{CommandFactory, Parser};
use colored::*;
use stargazer::cli::{Cli, Command, GenerateArgs};
use stargazer::config::Config;
use stargazer::pipeline;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Generate(args)) => run_generate(&cli.config, &args).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

async fn run_generate(config_path: &Path, args: &GenerateArgs) -> anyhow::Result<()> {
    let mut config = Config::load(config_path)
        .with_context(|| format!("Failed to load config file {}", config_path.display()))?;
    args.apply_to(&mut config);

    if config.test {
        println!("{}", "Running with sample data".yellow());
    }

    let stars = pipeline::generate(&config)
        .await
        .context("Failed to generate starred repositories list")?;

    println!(
        "{} {} repositories in {} languages written to {}",
        "✅".green(),
        stars.total.to_string().bold(),
        stars.groups.len(),
        config.output_file.bold()
    );
    tracing::info!(total_repositories = stars.total, "Successfully generated starred repositories list");

    Ok(())
}
