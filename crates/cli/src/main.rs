//! # DNS Proxy
//!
//! Answers questions from locally configured hostname tables and manages
//! those tables.

mod bootstrap;
mod commands;
mod di;

use clap::{Parser, Subcommand};
use commands::{EnvsCommand, HostsCommand, ResolveArgs};
use dns_proxy_application::ports::EnvironmentRepository;
use dns_proxy_domain::CliOverrides;
use di::{DnsServices, Repositories, UseCases};

#[derive(Parser)]
#[command(name = "dns-proxy")]
#[command(version)]
#[command(about = "Local DNS answers from configured hostname tables")]
struct Cli {
    /// Path to configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Environment to read from or change; defaults to the active one
    #[arg(short = 'e', long)]
    env: Option<String>,

    /// Answer cache capacity
    #[arg(long)]
    cache_size: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve hostnames the way the proxy answers them
    Resolve(ResolveArgs),

    /// Manage hostname records
    #[command(subcommand)]
    Hosts(HostsCommand),

    /// Manage environments
    #[command(subcommand)]
    Envs(EnvsCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        cache_max_entries: cli.cache_size,
        log_level: cli.log_level.clone(),
        ..Default::default()
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let config_file = bootstrap::config_file(cli.config.as_deref());
    bootstrap::log_config_summary(&config, &config_file);

    let cache_max_entries = config.cache.max_entries;
    let repos = Repositories::new(config, config_file);
    let dns = DnsServices::new(cache_max_entries, &repos);
    let use_cases = UseCases::new(&repos, &dns);

    match cli.command {
        Command::Resolve(args) => {
            let all_answered = commands::run_resolve(args, cli.env, &use_cases, &dns).await?;
            if !all_answered {
                std::process::exit(1);
            }
        }
        Command::Hosts(cmd) => {
            let env = match cli.env {
                Some(env) => env,
                None => repos.config.active_env().await?,
            };
            commands::run_hosts(cmd, &env, &use_cases).await?;
        }
        Command::Envs(cmd) => commands::run_envs(cmd, &use_cases).await?,
    }

    Ok(())
}
