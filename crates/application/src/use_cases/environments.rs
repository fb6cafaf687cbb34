use crate::ports::EnvironmentRepository;
use dns_proxy_domain::DomainError;
use std::sync::Arc;
use tracing::info;

pub struct CreateEnvironmentUseCase {
    repository: Arc<dyn EnvironmentRepository>,
}

impl CreateEnvironmentUseCase {
    pub fn new(repository: Arc<dyn EnvironmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, name: &str) -> Result<(), DomainError> {
        let name = name.trim();
        // the unscoped environment always exists
        if name.is_empty() {
            return Err(DomainError::EnvironmentAlreadyExists(String::new()));
        }
        self.repository.add_env(name).await?;
        info!(env = name, "Environment created");
        Ok(())
    }
}

pub struct DeleteEnvironmentUseCase {
    repository: Arc<dyn EnvironmentRepository>,
}

impl DeleteEnvironmentUseCase {
    pub fn new(repository: Arc<dyn EnvironmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, name: &str) -> Result<(), DomainError> {
        self.repository.remove_env(name).await?;
        info!(env = name, "Environment deleted");
        Ok(())
    }
}

pub struct ActivateEnvironmentUseCase {
    repository: Arc<dyn EnvironmentRepository>,
}

impl ActivateEnvironmentUseCase {
    pub fn new(repository: Arc<dyn EnvironmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, name: &str) -> Result<(), DomainError> {
        self.repository.set_active_env(name).await?;
        info!(env = name, "Environment activated");
        Ok(())
    }
}

pub struct ListEnvironmentsUseCase {
    repository: Arc<dyn EnvironmentRepository>,
}

impl ListEnvironmentsUseCase {
    pub fn new(repository: Arc<dyn EnvironmentRepository>) -> Self {
        Self { repository }
    }

    /// Environment names, and the currently active one
    pub async fn execute(&self) -> Result<(Vec<String>, String), DomainError> {
        let envs = self.repository.list_envs().await?;
        let active = self.repository.active_env().await?;
        Ok((envs, active))
    }
}
