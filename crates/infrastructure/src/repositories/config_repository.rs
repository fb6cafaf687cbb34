use async_trait::async_trait;
use dns_proxy_application::ports::{EnvironmentRepository, HostnameRepository};
use dns_proxy_domain::config::DEFAULT_ENV;
use dns_proxy_domain::{Config, DomainError, Environment, HostnameRecord};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{instrument, warn};

/// Hostname and environment tables backed by the TOML configuration.
///
/// Every mutation is written back to the file it was loaded from. If that
/// write fails, the in-memory tables are restored to their previous state.
pub struct TomlConfigRepository {
    config: Arc<RwLock<Config>>,
    path: Option<String>,
}

impl TomlConfigRepository {
    pub fn new(config: Config, path: Option<String>) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Tables that are never persisted
    pub fn in_memory() -> Self {
        Self::new(Config::default(), None)
    }

    pub fn load(path: &str) -> Result<Self, DomainError> {
        let config = Config::from_file(path)?;
        config.validate()?;
        Ok(Self::new(config, Some(path.to_string())))
    }

    pub fn config(&self) -> Arc<RwLock<Config>> {
        Arc::clone(&self.config)
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Drop every environment and hostname, keeping the other settings.
    pub async fn reset(&self) -> Result<(), DomainError> {
        self.mutate(|config| {
            config.envs = vec![Environment::new(DEFAULT_ENV)];
            config.active_env = DEFAULT_ENV.to_string();
            Ok(())
        })
        .await
    }

    async fn mutate<T, F>(&self, apply: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut Config) -> Result<T, DomainError>,
    {
        let mut config = self.config.write().await;
        let previous = config.clone();

        let outcome = apply(&mut config).and_then(|value| {
            if let Some(path) = &self.path {
                config.save(path)?;
            }
            Ok(value)
        });

        if let Err(e) = &outcome {
            if let Some(path) = &self.path {
                warn!(error = %e, path = %path, "Configuration change rolled back");
            }
            *config = previous;
        }

        outcome
    }
}

fn env_mut<'a>(config: &'a mut Config, env: &str) -> Result<&'a mut Environment, DomainError> {
    config
        .env_mut(env)
        .ok_or_else(|| DomainError::EnvironmentNotFound(env.to_string()))
}

#[async_trait]
impl HostnameRepository for TomlConfigRepository {
    async fn find_hostname(
        &self,
        hostname: &str,
        env: &str,
    ) -> Result<Option<HostnameRecord>, DomainError> {
        let config = self.config.read().await;
        Ok(config.find_hostname(hostname, env).cloned())
    }

    async fn list_hostnames(&self, env: &str) -> Result<Vec<HostnameRecord>, DomainError> {
        let config = self.config.read().await;
        config
            .env(env)
            .map(|e| e.hostnames.clone())
            .ok_or_else(|| DomainError::EnvironmentNotFound(env.to_string()))
    }

    #[instrument(skip(self, record), fields(hostname = %record.hostname))]
    async fn add_hostname(
        &self,
        env: &str,
        mut record: HostnameRecord,
    ) -> Result<HostnameRecord, DomainError> {
        self.mutate(|config| {
            let id = config.next_hostname_id();
            let table = env_mut(config, env)?;

            if table.find(&record.hostname).is_some() {
                return Err(DomainError::HostnameAlreadyExists {
                    env: env.to_string(),
                    hostname: record.hostname.clone(),
                });
            }

            record.id = id;
            record.environment = env.to_string();
            table.hostnames.push(record.clone());
            Ok(record)
        })
        .await
    }

    #[instrument(skip(self, record), fields(hostname = %record.hostname))]
    async fn update_hostname(
        &self,
        env: &str,
        mut record: HostnameRecord,
    ) -> Result<(), DomainError> {
        self.mutate(|config| {
            let table = env_mut(config, env)?;
            let index = table
                .position(&record.hostname)
                .ok_or_else(|| DomainError::NotFound(record.hostname.clone()))?;

            record.id = table.hostnames[index].id;
            record.environment = env.to_string();
            table.hostnames[index] = record;
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn remove_hostname(
        &self,
        env: &str,
        hostname: &str,
    ) -> Result<HostnameRecord, DomainError> {
        self.mutate(|config| {
            let table = env_mut(config, env)?;
            let index = table
                .position(hostname)
                .ok_or_else(|| DomainError::NotFound(hostname.to_string()))?;
            Ok(table.hostnames.remove(index))
        })
        .await
    }
}

#[async_trait]
impl EnvironmentRepository for TomlConfigRepository {
    async fn list_envs(&self) -> Result<Vec<String>, DomainError> {
        let config = self.config.read().await;
        Ok(config.envs.iter().map(|e| e.name.clone()).collect())
    }

    #[instrument(skip(self))]
    async fn add_env(&self, name: &str) -> Result<(), DomainError> {
        self.mutate(|config| {
            if config.env(name).is_some() {
                return Err(DomainError::EnvironmentAlreadyExists(name.to_string()));
            }
            config.envs.push(Environment::new(name));
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn remove_env(&self, name: &str) -> Result<(), DomainError> {
        if name == DEFAULT_ENV {
            return Err(DomainError::ConfigError(
                "The default environment cannot be removed".to_string(),
            ));
        }

        self.mutate(|config| {
            let before = config.envs.len();
            config.envs.retain(|e| e.name != name);
            if config.envs.len() == before {
                return Err(DomainError::EnvironmentNotFound(name.to_string()));
            }
            if config.active_env == name {
                config.active_env = DEFAULT_ENV.to_string();
            }
            Ok(())
        })
        .await
    }

    async fn active_env(&self) -> Result<String, DomainError> {
        Ok(self.config.read().await.active_env.clone())
    }

    #[instrument(skip(self))]
    async fn set_active_env(&self, name: &str) -> Result<(), DomainError> {
        self.mutate(|config| {
            if config.env(name).is_none() {
                return Err(DomainError::EnvironmentNotFound(name.to_string()));
            }
            config.active_env = name.to_string();
            Ok(())
        })
        .await
    }
}
