mod answer_cache;
mod dns_solver;
mod hostname_repository;

pub use answer_cache::{AnswerCache, CacheEntry, CacheMetricsSnapshot};
pub use dns_solver::DnsSolver;
pub use hostname_repository::{EnvironmentRepository, HostnameRepository};
