use dns_proxy_domain::DomainError;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

/// Request-scoped data threaded through a single resolution.
///
/// Carries the environment the question should be answered from, plus the
/// cancellation token and deadline bounding every collaborator call.
#[derive(Debug, Clone)]
pub struct QueryContext {
    request_id: u64,
    environment: Option<Arc<str>>,
    cancellation: CancellationToken,
    deadline: Option<Instant>,
}

impl Default for QueryContext {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryContext {
    pub fn new() -> Self {
        Self {
            request_id: NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed),
            environment: None,
            cancellation: CancellationToken::new(),
            deadline: None,
        }
    }

    pub fn with_environment(mut self, environment: impl Into<Arc<str>>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    #[inline]
    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    /// Environment to resolve from; the unscoped `""` unless one was set.
    #[inline]
    pub fn environment(&self) -> &str {
        self.environment.as_deref().unwrap_or("")
    }

    #[inline]
    pub fn has_environment(&self) -> bool {
        self.environment.is_some()
    }

    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Drives `fut` until it completes, the context is cancelled, or the
    /// deadline passes.
    pub async fn run<F, T>(&self, fut: F) -> Result<T, DomainError>
    where
        F: Future<Output = Result<T, DomainError>>,
    {
        if self.is_cancelled() {
            return Err(DomainError::Cancelled);
        }

        let guarded = async {
            tokio::select! {
                biased;
                _ = self.cancellation.cancelled() => Err(DomainError::Cancelled),
                result = fut => result,
            }
        };

        match self.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, guarded)
                .await
                .map_err(|_| DomainError::QueryTimeout)?,
            None => guarded.await,
        }
    }
}
