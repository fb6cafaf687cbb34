use crate::QueryContext;
use async_trait::async_trait;
use dns_proxy_domain::{DnsAnswerMessage, DnsQuestion, DomainError};
use std::sync::Arc;

/// Answers a single question.
///
/// The returned message is shared with the answer cache; callers that need
/// to modify it must clone it first.
#[async_trait]
pub trait DnsSolver: Send + Sync {
    async fn solve(
        &self,
        ctx: &QueryContext,
        question: &DnsQuestion,
    ) -> Result<Arc<DnsAnswerMessage>, DomainError>;

    fn name(&self) -> &'static str;
}
