use crate::ports::{DnsSolver, EnvironmentRepository};
use crate::QueryContext;
use dns_proxy_domain::{DnsAnswerMessage, DnsQuestion, DomainError};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Entry point used by a transport for every question.
///
/// Fills in the active environment when the request did not choose one, then
/// hands the question to the solver.
pub struct SolveQuestionUseCase {
    solver: Arc<dyn DnsSolver>,
    environments: Arc<dyn EnvironmentRepository>,
}

impl SolveQuestionUseCase {
    pub fn new(solver: Arc<dyn DnsSolver>, environments: Arc<dyn EnvironmentRepository>) -> Self {
        Self {
            solver,
            environments,
        }
    }

    pub async fn execute(
        &self,
        ctx: QueryContext,
        question: &DnsQuestion,
    ) -> Result<Arc<DnsAnswerMessage>, DomainError> {
        let start = Instant::now();

        let ctx = if ctx.has_environment() {
            ctx
        } else {
            let active = ctx.run(self.environments.active_env()).await?;
            ctx.with_environment(active)
        };

        let result = self.solver.solve(&ctx, question).await;
        let elapsed_us = start.elapsed().as_micros() as u64;

        match &result {
            Ok(answer) => debug!(
                request_id = ctx.request_id(),
                name = %question.name,
                env = ctx.environment(),
                solver = self.solver.name(),
                answers = answer.len(),
                elapsed_us,
                "Question answered"
            ),
            Err(e) => info!(
                request_id = ctx.request_id(),
                name = %question.name,
                env = ctx.environment(),
                solver = self.solver.name(),
                error = %e,
                elapsed_us,
                "Question not answered"
            ),
        }

        result
    }
}
