use crate::di::UseCases;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum HostsCommand {
    /// List the hostnames of an environment
    List,

    /// Map a hostname to an IPv4 address
    Add {
        hostname: String,
        ip: String,
        /// Seconds a computed answer stays cached
        #[arg(long, default_value = "300")]
        ttl: u32,
    },

    /// Change the address or TTL of an existing hostname
    Update {
        hostname: String,
        ip: String,
        #[arg(long, default_value = "300")]
        ttl: u32,
    },

    /// Remove a hostname
    Remove { hostname: String },
}

pub async fn run_hosts(cmd: HostsCommand, env: &str, use_cases: &UseCases) -> anyhow::Result<()> {
    match cmd {
        HostsCommand::List => {
            for record in use_cases.list_hostnames.execute(env).await? {
                println!(
                    "{}\t{}\t{}\t{}",
                    record.id, record.hostname, record.ip, record.ttl
                );
            }
        }
        HostsCommand::Add { hostname, ip, ttl } => {
            let record = use_cases
                .create_hostname
                .execute(env, &hostname, &ip, ttl)
                .await?;
            println!("added {} -> {} (id {})", record.hostname, record.ip, record.id);
        }
        HostsCommand::Update { hostname, ip, ttl } => {
            use_cases
                .update_hostname
                .execute(env, &hostname, &ip, ttl)
                .await?;
            println!("updated {}", hostname);
        }
        HostsCommand::Remove { hostname } => {
            let record = use_cases.delete_hostname.execute(env, &hostname).await?;
            println!("removed {}", record.hostname);
        }
    }
    Ok(())
}
