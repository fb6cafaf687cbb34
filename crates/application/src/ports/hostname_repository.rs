use async_trait::async_trait;
use dns_proxy_domain::{DomainError, HostnameRecord};

/// Read/write access to the configured hostname tables.
///
/// `find_hostname` is the only call made on the resolution path; the rest
/// backs the management commands.
#[async_trait]
pub trait HostnameRepository: Send + Sync {
    /// Returns `Ok(None)` when either the environment or the hostname is
    /// unknown.
    async fn find_hostname(
        &self,
        hostname: &str,
        env: &str,
    ) -> Result<Option<HostnameRecord>, DomainError>;

    async fn list_hostnames(&self, env: &str) -> Result<Vec<HostnameRecord>, DomainError>;

    /// Stores a new record and returns it with its assigned id.
    async fn add_hostname(
        &self,
        env: &str,
        record: HostnameRecord,
    ) -> Result<HostnameRecord, DomainError>;

    /// Replaces the record with the same hostname.
    async fn update_hostname(&self, env: &str, record: HostnameRecord)
        -> Result<(), DomainError>;

    async fn remove_hostname(
        &self,
        env: &str,
        hostname: &str,
    ) -> Result<HostnameRecord, DomainError>;
}

#[async_trait]
pub trait EnvironmentRepository: Send + Sync {
    async fn list_envs(&self) -> Result<Vec<String>, DomainError>;

    async fn add_env(&self, name: &str) -> Result<(), DomainError>;

    /// The default environment cannot be removed.
    async fn remove_env(&self, name: &str) -> Result<(), DomainError>;

    async fn active_env(&self) -> Result<String, DomainError>;

    async fn set_active_env(&self, name: &str) -> Result<(), DomainError>;
}
