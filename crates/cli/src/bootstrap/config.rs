use anyhow::Context;
use merge_dns_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(config_path: &str, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)
        .with_context(|| format!("Loading configuration from {}", config_path))?;
    config.validate().context("Validating configuration")?;

    Ok(config)
}

pub fn log_config_summary(config_path: &str, config: &Config) {
    info!(
        config_file = config_path,
        local_file = %config.local_source.file,
        local_interval_secs = config.local_source.scrape_interval,
        remote_endpoint = %config.remote_source.endpoint,
        remote_interval_secs = config.remote_source.scrape_interval,
        include_rules = config.remote_source.include.deployments.len(),
        destination = %config.destination.file,
        "Configuration loaded"
    );
}
