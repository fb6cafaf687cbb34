use dns_proxy_application::ports::CacheMetricsSnapshot;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Cache metrics
#[derive(Debug, Default)]
pub struct CacheMetrics {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub insertions: AtomicU64,
    pub evictions: AtomicU64,
    pub invalidations: AtomicU64,
}

impl CacheMetrics {
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.load(AtomicOrdering::Relaxed) as f64;
        let total = hits + self.misses.load(AtomicOrdering::Relaxed) as f64;

        if total > 0.0 {
            (hits / total) * 100.0
        } else {
            0.0
        }
    }

    pub fn snapshot(&self, total_entries: usize, capacity: usize) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            total_entries,
            capacity,
            hits: self.hits.load(AtomicOrdering::Relaxed),
            misses: self.misses.load(AtomicOrdering::Relaxed),
            insertions: self.insertions.load(AtomicOrdering::Relaxed),
            evictions: self.evictions.load(AtomicOrdering::Relaxed),
            invalidations: self.invalidations.load(AtomicOrdering::Relaxed),
            hit_rate: self.hit_rate(),
        }
    }
}
