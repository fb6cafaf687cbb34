use crate::di::UseCases;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum EnvsCommand {
    /// List environments, marking the active one
    List,

    /// Create an empty environment
    Add { name: String },

    /// Delete an environment and its hostnames
    Remove { name: String },

    /// Use an environment for requests that do not choose one
    Activate { name: String },
}

pub async fn run_envs(cmd: EnvsCommand, use_cases: &UseCases) -> anyhow::Result<()> {
    match cmd {
        EnvsCommand::List => {
            let (envs, active) = use_cases.list_envs.execute().await?;
            for env in envs {
                let marker = if env == active { "*" } else { " " };
                let label = if env.is_empty() { "(default)" } else { env.as_str() };
                println!("{} {}", marker, label);
            }
        }
        EnvsCommand::Add { name } => {
            use_cases.create_env.execute(&name).await?;
            println!("created environment {}", name);
        }
        EnvsCommand::Remove { name } => {
            use_cases.delete_env.execute(&name).await?;
            println!("removed environment {}", name);
        }
        EnvsCommand::Activate { name } => {
            use_cases.activate_env.execute(&name).await?;
            println!("active environment is now {:?}", name);
        }
    }
    Ok(())
}
