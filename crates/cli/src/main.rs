//! # merge-dns
//!
//! Merges a local BOSH DNS `records.json` with one fetched from a remote
//! endpoint and writes the result to a destination file.

mod bootstrap;
mod commands;
mod di;

use bootstrap::{init_logging, load_config, log_config_summary};
use clap::{Parser, Subcommand};
use di::UseCases;
use merge_dns_domain::{CliOverrides, DEFAULT_CONFIG_PATH};

#[derive(Parser)]
#[command(name = "merge-dns")]
#[command(version)]
#[command(about = "Merge local and remote BOSH DNS records")]
struct Cli {
    /// Path to the configuration file
    #[arg(short = 'c', long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level or filter directive (overrides `[logging] level`)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Merge once and exit
    Update,
    /// Merge, then keep merging whenever either source changes
    Watch,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        log_level: cli.log_level,
    };
    let config = load_config(&cli.config, overrides)?;

    init_logging(&config);
    log_config_summary(&cli.config, &config);

    let use_cases = UseCases::new(&config)?;

    match cli.command {
        Command::Update => commands::update::run(&use_cases).await,
        Command::Watch => commands::watch::run(&config, &use_cases).await,
    }
}
