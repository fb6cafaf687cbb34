use async_trait::async_trait;
use dns_proxy_application::ports::HostnameRepository;
use dns_proxy_domain::{DomainError, HostnameRecord};
use dns_proxy_infrastructure::repositories::TomlConfigRepository;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

pub const GITHUB_IP: Ipv4Addr = Ipv4Addr::new(192, 168, 0, 1);

pub fn github_record(ttl: u32) -> HostnameRecord {
    HostnameRecord::new("github.com", GITHUB_IP, ttl)
}

/// In-memory tables holding `github.com -> 192.168.0.1` in the default environment.
pub async fn github_repository(ttl: u32) -> Arc<TomlConfigRepository> {
    let repo = TomlConfigRepository::in_memory();
    repo.add_hostname("", github_record(ttl))
        .await
        .expect("fixture record");
    Arc::new(repo)
}

/// Repository whose every call fails with an I/O error.
pub struct FailingHostnameRepository;

#[async_trait]
impl HostnameRepository for FailingHostnameRepository {
    async fn find_hostname(
        &self,
        _hostname: &str,
        _env: &str,
    ) -> Result<Option<HostnameRecord>, DomainError> {
        Err(DomainError::IoError("hostname store unavailable".to_string()))
    }

    async fn list_hostnames(&self, _env: &str) -> Result<Vec<HostnameRecord>, DomainError> {
        Err(DomainError::IoError("hostname store unavailable".to_string()))
    }

    async fn add_hostname(
        &self,
        _env: &str,
        _record: HostnameRecord,
    ) -> Result<HostnameRecord, DomainError> {
        Err(DomainError::IoError("hostname store unavailable".to_string()))
    }

    async fn update_hostname(
        &self,
        _env: &str,
        _record: HostnameRecord,
    ) -> Result<(), DomainError> {
        Err(DomainError::IoError("hostname store unavailable".to_string()))
    }

    async fn remove_hostname(
        &self,
        _env: &str,
        _hostname: &str,
    ) -> Result<HostnameRecord, DomainError> {
        Err(DomainError::IoError("hostname store unavailable".to_string()))
    }
}

/// Delegates to another repository after a fixed delay on lookups.
pub struct SlowHostnameRepository {
    inner: Arc<dyn HostnameRepository>,
    delay: Duration,
}

impl SlowHostnameRepository {
    pub fn new(inner: Arc<dyn HostnameRepository>, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait]
impl HostnameRepository for SlowHostnameRepository {
    async fn find_hostname(
        &self,
        hostname: &str,
        env: &str,
    ) -> Result<Option<HostnameRecord>, DomainError> {
        tokio::time::sleep(self.delay).await;
        self.inner.find_hostname(hostname, env).await
    }

    async fn list_hostnames(&self, env: &str) -> Result<Vec<HostnameRecord>, DomainError> {
        self.inner.list_hostnames(env).await
    }

    async fn add_hostname(
        &self,
        env: &str,
        record: HostnameRecord,
    ) -> Result<HostnameRecord, DomainError> {
        self.inner.add_hostname(env, record).await
    }

    async fn update_hostname(&self, env: &str, record: HostnameRecord) -> Result<(), DomainError> {
        self.inner.update_hostname(env, record).await
    }

    async fn remove_hostname(
        &self,
        env: &str,
        hostname: &str,
    ) -> Result<HostnameRecord, DomainError> {
        self.inner.remove_hostname(env, hostname).await
    }
}
