#![allow(dead_code)]

use async_trait::async_trait;
use dns_proxy_application::ports::{DnsSolver, EnvironmentRepository, HostnameRepository};
use dns_proxy_application::QueryContext;
use dns_proxy_domain::{DnsAnswerMessage, DnsQuestion, DomainError, HostnameRecord};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

// ============================================================================
// Mock HostnameRepository / EnvironmentRepository
// ============================================================================

#[derive(Clone)]
pub struct MockHostnameRepository {
    envs: Arc<RwLock<BTreeMap<String, Vec<HostnameRecord>>>>,
    active: Arc<RwLock<String>>,
    next_id: Arc<Mutex<u64>>,
}

impl MockHostnameRepository {
    pub fn new() -> Self {
        let mut envs = BTreeMap::new();
        envs.insert(String::new(), Vec::new());
        Self {
            envs: Arc::new(RwLock::new(envs)),
            active: Arc::new(RwLock::new(String::new())),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    pub async fn insert(&self, env: &str, record: HostnameRecord) {
        self.envs
            .write()
            .await
            .entry(env.to_string())
            .or_default()
            .push(record.with_environment(env));
    }

    pub async fn count(&self, env: &str) -> usize {
        self.envs.read().await.get(env).map_or(0, Vec::len)
    }
}

impl Default for MockHostnameRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostnameRepository for MockHostnameRepository {
    async fn find_hostname(
        &self,
        hostname: &str,
        env: &str,
    ) -> Result<Option<HostnameRecord>, DomainError> {
        Ok(self
            .envs
            .read()
            .await
            .get(env)
            .and_then(|records| records.iter().find(|r| r.matches(hostname)).cloned()))
    }

    async fn list_hostnames(&self, env: &str) -> Result<Vec<HostnameRecord>, DomainError> {
        self.envs
            .read()
            .await
            .get(env)
            .cloned()
            .ok_or_else(|| DomainError::EnvironmentNotFound(env.to_string()))
    }

    async fn add_hostname(
        &self,
        env: &str,
        mut record: HostnameRecord,
    ) -> Result<HostnameRecord, DomainError> {
        let mut envs = self.envs.write().await;
        let records = envs
            .get_mut(env)
            .ok_or_else(|| DomainError::EnvironmentNotFound(env.to_string()))?;
        if records.iter().any(|r| r.matches(&record.hostname)) {
            return Err(DomainError::HostnameAlreadyExists {
                env: env.to_string(),
                hostname: record.hostname,
            });
        }
        let mut next_id = self.next_id.lock().unwrap();
        record.id = *next_id;
        *next_id += 1;
        records.push(record.clone());
        Ok(record)
    }

    async fn update_hostname(
        &self,
        env: &str,
        record: HostnameRecord,
    ) -> Result<(), DomainError> {
        let mut envs = self.envs.write().await;
        let records = envs
            .get_mut(env)
            .ok_or_else(|| DomainError::EnvironmentNotFound(env.to_string()))?;
        let existing = records
            .iter_mut()
            .find(|r| r.matches(&record.hostname))
            .ok_or_else(|| DomainError::NotFound(record.hostname.clone()))?;
        let id = existing.id;
        *existing = HostnameRecord { id, ..record };
        Ok(())
    }

    async fn remove_hostname(
        &self,
        env: &str,
        hostname: &str,
    ) -> Result<HostnameRecord, DomainError> {
        let mut envs = self.envs.write().await;
        let records = envs
            .get_mut(env)
            .ok_or_else(|| DomainError::EnvironmentNotFound(env.to_string()))?;
        let index = records
            .iter()
            .position(|r| r.matches(hostname))
            .ok_or_else(|| DomainError::NotFound(hostname.to_string()))?;
        Ok(records.remove(index))
    }
}

#[async_trait]
impl EnvironmentRepository for MockHostnameRepository {
    async fn list_envs(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.envs.read().await.keys().cloned().collect())
    }

    async fn add_env(&self, name: &str) -> Result<(), DomainError> {
        let mut envs = self.envs.write().await;
        if envs.contains_key(name) {
            return Err(DomainError::EnvironmentAlreadyExists(name.to_string()));
        }
        envs.insert(name.to_string(), Vec::new());
        Ok(())
    }

    async fn remove_env(&self, name: &str) -> Result<(), DomainError> {
        self.envs
            .write()
            .await
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| DomainError::EnvironmentNotFound(name.to_string()))
    }

    async fn active_env(&self) -> Result<String, DomainError> {
        Ok(self.active.read().await.clone())
    }

    async fn set_active_env(&self, name: &str) -> Result<(), DomainError> {
        if !self.envs.read().await.contains_key(name) {
            return Err(DomainError::EnvironmentNotFound(name.to_string()));
        }
        *self.active.write().await = name.to_string();
        Ok(())
    }
}

// ============================================================================
// Mock DnsSolver
// ============================================================================

/// Answers from a fixed table and records the environment of every call.
pub struct MockDnsSolver {
    answers: Mutex<BTreeMap<(String, String), Arc<DnsAnswerMessage>>>,
    seen_envs: Mutex<Vec<String>>,
}

impl MockDnsSolver {
    pub fn new() -> Self {
        Self {
            answers: Mutex::new(BTreeMap::new()),
            seen_envs: Mutex::new(Vec::new()),
        }
    }

    pub fn set_answer(&self, env: &str, question: &DnsQuestion, answer: DnsAnswerMessage) {
        self.answers.lock().unwrap().insert(
            (env.to_string(), question.hostname().to_string()),
            Arc::new(answer),
        );
    }

    pub fn seen_envs(&self) -> Vec<String> {
        self.seen_envs.lock().unwrap().clone()
    }
}

impl Default for MockDnsSolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsSolver for MockDnsSolver {
    async fn solve(
        &self,
        ctx: &QueryContext,
        question: &DnsQuestion,
    ) -> Result<Arc<DnsAnswerMessage>, DomainError> {
        self.seen_envs
            .lock()
            .unwrap()
            .push(ctx.environment().to_string());
        self.answers
            .lock()
            .unwrap()
            .get(&(ctx.environment().to_string(), question.hostname().to_string()))
            .cloned()
            .ok_or_else(|| DomainError::NotFound(question.hostname().to_string()))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
