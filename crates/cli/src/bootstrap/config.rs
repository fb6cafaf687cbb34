use dns_proxy_domain::{CliOverrides, Config};
use tracing::info;

/// File that mutating commands write to when no configuration file exists yet
pub const DEFAULT_CONFIG_FILE: &str = "dns-proxy.toml";

/// Path of the configuration file in use, or the one that will be created
pub fn config_file(config_path: Option<&str>) -> String {
    config_path
        .map(str::to_string)
        .or_else(Config::get_config_path)
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string())
}

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Needs the subscriber installed, so it runs after `init_logging`.
pub fn log_config_summary(config: &Config, config_file: &str) {
    let hostnames: usize = config.envs.iter().map(|e| e.hostnames.len()).sum();
    info!(
        config_file,
        active_env = %config.active_env,
        envs = config.envs.len(),
        hostnames,
        cache_max_entries = config.cache.max_entries,
        "Configuration loaded"
    );
}
