pub mod lru_store;
pub mod metrics;

pub use lru_store::LruAnswerCache;
pub use metrics::CacheMetrics;
