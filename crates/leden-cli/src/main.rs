use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod formatting;
mod menu;
mod session;
mod views;

use crate::cli::Cli;
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they do not mix with the prompts.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::init();
    let config = Config::load(&cli.config)?;

    menu::run(&config).await
}
