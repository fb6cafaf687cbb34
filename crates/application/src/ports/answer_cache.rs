use dns_proxy_domain::DnsAnswerMessage;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// A computed answer together with its own expiration window.
///
/// `created_at` is fixed at construction; reading an entry never extends its
/// lifetime.
#[derive(Debug)]
pub struct CacheEntry {
    value: Arc<DnsAnswerMessage>,
    created_at: Instant,
    ttl: u32,
}

impl CacheEntry {
    pub fn new(value: DnsAnswerMessage, ttl: u32) -> Self {
        Self::with_created_at(value, ttl, Instant::now())
    }

    pub fn with_created_at(value: DnsAnswerMessage, ttl: u32, created_at: Instant) -> Self {
        Self {
            value: Arc::new(value),
            created_at,
            ttl,
        }
    }

    #[inline]
    pub fn value(&self) -> &Arc<DnsAnswerMessage> {
        &self.value
    }

    #[inline]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[inline]
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// `None` when the window does not fit in an `Instant`.
    pub fn expires_at(&self) -> Option<Instant> {
        self.created_at
            .checked_add(Duration::from_secs(u64::from(self.ttl)))
    }

    #[inline]
    pub fn is_fresh(&self) -> bool {
        self.is_fresh_at(Instant::now())
    }

    pub fn is_fresh_at(&self, now: Instant) -> bool {
        match self.expires_at() {
            Some(expires_at) => now < expires_at,
            None => true,
        }
    }

    /// Time left before the entry goes stale.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.expires_at()
            .map(|expires_at| expires_at.saturating_duration_since(now))
            .unwrap_or(Duration::MAX)
    }
}

/// Snapshot of answer cache counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheMetricsSnapshot {
    pub total_entries: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub evictions: u64,
    pub invalidations: u64,
    pub hit_rate: f64,
}

/// Bounded, hostname-keyed store for computed answers.
///
/// Implementations never interpret freshness: deciding whether an entry is
/// still usable belongs to the caller.
pub trait AnswerCache: Send + Sync {
    /// Returns the stored entry and marks it most recently used.
    fn get(&self, key: &str) -> Option<Arc<CacheEntry>>;

    /// Stores `entry` only if `key` has no entry yet.
    ///
    /// Returns whichever entry is stored once the call completes: `entry`
    /// itself when it was inserted, otherwise the existing one, untouched.
    fn put_if_absent(&self, key: &str, entry: Arc<CacheEntry>) -> Arc<CacheEntry>;

    /// Removes the entry under `key` only if it is `expected` (same
    /// allocation). Returns whether something was removed.
    fn remove_if_same(&self, key: &str, expected: &Arc<CacheEntry>) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn capacity(&self) -> usize;

    fn clear(&self);

    fn metrics_snapshot(&self) -> CacheMetricsSnapshot;
}
