use async_trait::async_trait;
use dns_proxy_application::ports::{AnswerCache, CacheEntry, DnsSolver, HostnameRepository};
use dns_proxy_application::QueryContext;
use dns_proxy_domain::{DnsAnswerMessage, DnsQuestion, DomainError};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::debug;

/// Answers questions from the configured hostname tables.
///
/// Built answers are memoized per hostname until the record's TTL elapses.
/// The wire TTL of every answer stays 0; the record TTL only drives the
/// cache entry's lifetime.
pub struct LocalDnsSolver {
    hostnames: Arc<dyn HostnameRepository>,
    cache: Arc<dyn AnswerCache>,
}

impl LocalDnsSolver {
    pub fn new(hostnames: Arc<dyn HostnameRepository>, cache: Arc<dyn AnswerCache>) -> Self {
        Self { hostnames, cache }
    }

    /// Fresh cached answer for `key`, if any.
    ///
    /// A stale entry is dropped here so that the following `put_if_absent`
    /// can store the recomputed answer. Removal only succeeds while the
    /// stale entry is still the stored one.
    fn check_cache(&self, ctx: &QueryContext, key: &str) -> Option<Arc<DnsAnswerMessage>> {
        let entry = self.cache.get(key)?;
        let now = Instant::now();

        if entry.is_fresh_at(now) {
            debug!(
                request_id = ctx.request_id(),
                hostname = key,
                remaining_secs = entry.remaining(now).as_secs(),
                "Cache HIT"
            );
            return Some(Arc::clone(entry.value()));
        }

        let removed = self.cache.remove_if_same(key, &entry);
        debug!(
            request_id = ctx.request_id(),
            hostname = key,
            ttl = entry.ttl(),
            removed,
            "Cache entry STALE"
        );
        None
    }
}

#[async_trait]
impl DnsSolver for LocalDnsSolver {
    async fn solve(
        &self,
        ctx: &QueryContext,
        question: &DnsQuestion,
    ) -> Result<Arc<DnsAnswerMessage>, DomainError> {
        let key = question.hostname();

        if let Some(answer) = self.check_cache(ctx, key) {
            return Ok(answer);
        }

        debug!(
            request_id = ctx.request_id(),
            hostname = key,
            env = ctx.environment(),
            "Cache MISS"
        );

        let record = ctx
            .run(self.hostnames.find_hostname(key, ctx.environment()))
            .await?
            .ok_or_else(|| DomainError::NotFound(key.to_string()))?;

        let answer = DnsAnswerMessage::address(question, record.ip);
        let entry = Arc::new(CacheEntry::new(answer, record.ttl));
        let stored = self.cache.put_if_absent(key, Arc::clone(&entry));

        if !Arc::ptr_eq(&stored, &entry) {
            debug!(
                request_id = ctx.request_id(),
                hostname = key,
                "Concurrent lookup won the insert, using its answer"
            );
        }

        Ok(Arc::clone(stored.value()))
    }

    fn name(&self) -> &'static str {
        "local"
    }
}
