use super::Repositories;
use dns_proxy_application::ports::AnswerCache;
use dns_proxy_infrastructure::dns::{LocalDnsSolver, LruAnswerCache};
use std::sync::Arc;

pub struct DnsServices {
    pub cache: Arc<LruAnswerCache>,
    pub solver: Arc<LocalDnsSolver>,
}

impl DnsServices {
    pub fn new(cache_max_entries: usize, repos: &Repositories) -> Self {
        let cache = Arc::new(LruAnswerCache::new(cache_max_entries));
        let solver = Arc::new(LocalDnsSolver::new(
            repos.config.clone(),
            cache.clone() as Arc<dyn AnswerCache>,
        ));

        Self { cache, solver }
    }
}
