use dns_proxy_application::ports::{AnswerCache, CacheEntry, CacheMetricsSnapshot};
use dns_proxy_infrastructure::dns::LruAnswerCache;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// LRU answer cache that counts the calls made on it.
pub struct SpyAnswerCache {
    inner: LruAnswerCache,
    gets: AtomicUsize,
    puts: AtomicUsize,
    removes: AtomicUsize,
}

impl SpyAnswerCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: LruAnswerCache::new(capacity),
            gets: AtomicUsize::new(0),
            puts: AtomicUsize::new(0),
            removes: AtomicUsize::new(0),
        }
    }

    pub fn get_calls(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn put_calls(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn remove_calls(&self) -> usize {
        self.removes.load(Ordering::SeqCst)
    }
}

impl AnswerCache for SpyAnswerCache {
    fn get(&self, key: &str) -> Option<Arc<CacheEntry>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key)
    }

    fn put_if_absent(&self, key: &str, entry: Arc<CacheEntry>) -> Arc<CacheEntry> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put_if_absent(key, entry)
    }

    fn remove_if_same(&self, key: &str, expected: &Arc<CacheEntry>) -> bool {
        self.removes.fetch_add(1, Ordering::SeqCst);
        self.inner.remove_if_same(key, expected)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    fn clear(&self) {
        self.inner.clear()
    }

    fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        self.inner.metrics_snapshot()
    }
}
