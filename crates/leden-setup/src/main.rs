use std::fs;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;

use leden_data::{count_active, FetchAll};
use leden_db::{Store, StoreConfig};

#[derive(Parser, Debug)]
#[clap(name = "leden-setup")]
struct Cli {
    /// Path of the config file
    #[clap(long, env = "LEDEN_CONFIG", default_value = "leden.toml")]
    pub config: String,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check the store connection and the collection contents
    Check,
    /// Rewrite boolean-era membership statuses to Ja / Nee
    MigrateStatus,
}

/// Only the store table is needed here; the rest of the config file
/// is ignored.
#[derive(Debug, Deserialize)]
struct SetupConfig {
    store: StoreConfig,
}

fn load_config(path: &str) -> Result<SetupConfig> {
    let raw = fs::read_to_string(path)
        .map_err(|e| anyhow!("cannot read config file {}: {}", path, e))?;
    let config = toml::from_str(&raw)
        .map_err(|e| anyhow!("cannot parse config file {}: {}", path, e))?;
    Ok(config)
}

/// Connect and report what is in the collection.
async fn check(config: &SetupConfig) -> Result<()> {
    let store = Store::connect(&config.store).await?;
    store.ping().await?;
    println!("Verbinding ok.");

    let legacy = store.count_legacy_status().await?;
    if legacy > 0 {
        return Err(anyhow!(
            "{} documents still carry a boolean Actueel_lid, run migrate-status first",
            legacy
        ));
    }

    let members = store.fetch_all().await?;
    println!("{} leden, {} actueel.", members.len(), count_active(&members));
    Ok(())
}

/// Run the legacy status migration and report the counts.
async fn migrate_status(config: &SetupConfig) -> Result<()> {
    let store = Store::connect(&config.store).await?;
    let report = store.migrate_membership_status().await?;
    println!(
        "Status migratie: {} naar Ja, {} naar Nee.",
        report.activated, report.deactivated
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    match cli.command {
        Command::Check => check(&config).await?,
        Command::MigrateStatus => migrate_status(&config).await?,
    }
    Ok(())
}
