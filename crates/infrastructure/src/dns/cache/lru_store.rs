use super::CacheMetrics;
use compact_str::CompactString;
use dns_proxy_application::ports::{AnswerCache, CacheEntry, CacheMetricsSnapshot};
use lru::LruCache;
use rustc_hash::FxBuildHasher;
use std::num::NonZeroUsize;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

/// Fixed-capacity answer cache with least-recently-used eviction.
///
/// Every operation takes the same mutex, which is what makes
/// `put_if_absent` and `remove_if_same` atomic with respect to each other.
/// Critical sections never await and never call back into user code.
pub struct LruAnswerCache {
    entries: Mutex<LruCache<CompactString, Arc<CacheEntry>, FxBuildHasher>>,
    capacity: NonZeroUsize,
    metrics: CacheMetrics,
}

impl LruAnswerCache {
    /// A capacity of 0 is raised to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);

        info!(capacity = capacity.get(), "Initializing answer cache");

        Self {
            entries: Mutex::new(LruCache::with_hasher(capacity, FxBuildHasher)),
            capacity,
            metrics: CacheMetrics::default(),
        }
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    /// Keys from most to least recently used.
    pub fn keys(&self) -> Vec<String> {
        self.lock().iter().map(|(k, _)| k.to_string()).collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains(key)
    }

    #[inline]
    fn lock(&self) -> MutexGuard<'_, LruCache<CompactString, Arc<CacheEntry>, FxBuildHasher>> {
        // Entries stay consistent even if a holder panicked: every mutation
        // is a single LruCache call.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AnswerCache for LruAnswerCache {
    fn get(&self, key: &str) -> Option<Arc<CacheEntry>> {
        let found = self.lock().get(key).map(Arc::clone);

        match found {
            Some(entry) => {
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                Some(entry)
            }
            None => {
                self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
                None
            }
        }
    }

    fn put_if_absent(&self, key: &str, entry: Arc<CacheEntry>) -> Arc<CacheEntry> {
        let mut entries = self.lock();

        // peek: a lost race is not an access
        if let Some(existing) = entries.peek(key) {
            return Arc::clone(existing);
        }

        let evicted = entries.push(CompactString::from(key), Arc::clone(&entry));
        drop(entries);

        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
        if let Some((evicted_key, _)) = evicted {
            self.metrics.evictions.fetch_add(1, AtomicOrdering::Relaxed);
            debug!(key = key, evicted = %evicted_key, "Answer cache full, evicted LRU entry");
        }

        entry
    }

    fn remove_if_same(&self, key: &str, expected: &Arc<CacheEntry>) -> bool {
        let mut entries = self.lock();

        let same = entries
            .peek(key)
            .is_some_and(|current| Arc::ptr_eq(current, expected));
        if same {
            entries.pop(key);
            self.metrics
                .invalidations
                .fetch_add(1, AtomicOrdering::Relaxed);
        }

        same
    }

    fn len(&self) -> usize {
        self.lock().len()
    }

    fn capacity(&self) -> usize {
        self.capacity.get()
    }

    fn clear(&self) {
        self.lock().clear();
    }

    fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        self.metrics.snapshot(self.len(), self.capacity())
    }
}
