use crate::ports::HostnameRepository;
use dns_proxy_domain::{DomainError, HostnameRecord};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::info;

pub struct CreateHostnameUseCase {
    repository: Arc<dyn HostnameRepository>,
}

impl CreateHostnameUseCase {
    pub fn new(repository: Arc<dyn HostnameRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        env: &str,
        hostname: &str,
        ip: &str,
        ttl: u32,
    ) -> Result<HostnameRecord, DomainError> {
        let record = build_record(env, hostname, ip, ttl)?;
        let created = self.repository.add_hostname(env, record).await?;

        info!(
            id = created.id,
            hostname = %created.hostname,
            env = env,
            ip = %created.ip,
            ttl = created.ttl,
            "Hostname created"
        );

        Ok(created)
    }
}

pub struct UpdateHostnameUseCase {
    repository: Arc<dyn HostnameRepository>,
}

impl UpdateHostnameUseCase {
    pub fn new(repository: Arc<dyn HostnameRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        env: &str,
        hostname: &str,
        ip: &str,
        ttl: u32,
    ) -> Result<(), DomainError> {
        let record = build_record(env, hostname, ip, ttl)?;
        self.repository.update_hostname(env, record).await?;

        info!(hostname = hostname, env = env, "Hostname updated");
        Ok(())
    }
}

pub struct DeleteHostnameUseCase {
    repository: Arc<dyn HostnameRepository>,
}

impl DeleteHostnameUseCase {
    pub fn new(repository: Arc<dyn HostnameRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, env: &str, hostname: &str) -> Result<HostnameRecord, DomainError> {
        let removed = self.repository.remove_hostname(env, hostname).await?;
        info!(id = removed.id, hostname = %removed.hostname, env = env, "Hostname deleted");
        Ok(removed)
    }
}

pub struct ListHostnamesUseCase {
    repository: Arc<dyn HostnameRepository>,
}

impl ListHostnamesUseCase {
    pub fn new(repository: Arc<dyn HostnameRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, env: &str) -> Result<Vec<HostnameRecord>, DomainError> {
        self.repository.list_hostnames(env).await
    }
}

fn build_record(
    env: &str,
    hostname: &str,
    ip: &str,
    ttl: u32,
) -> Result<HostnameRecord, DomainError> {
    let ip: Ipv4Addr = ip
        .parse()
        .map_err(|_| DomainError::InvalidIpAddress(format!("Invalid IPv4 address: {}", ip)))?;

    let record = HostnameRecord::new(hostname.trim_end_matches('.'), ip, ttl).with_environment(env);
    record.validate().map_err(DomainError::InvalidDomainName)?;
    Ok(record)
}
