pub mod cache;
pub mod resolver;
pub mod wire;

pub use cache::{CacheMetrics, LruAnswerCache};
pub use resolver::LocalDnsSolver;
pub use wire::AnswerEncoder;
