mod helpers;

use dns_proxy_application::ports::EnvironmentRepository;
use dns_proxy_application::use_cases::SolveQuestionUseCase;
use dns_proxy_application::QueryContext;
use dns_proxy_domain::{DnsAnswerMessage, DnsQuestion, DomainError};
use helpers::{MockDnsSolver, MockHostnameRepository};
use std::net::Ipv4Addr;
use std::sync::Arc;

fn make_use_case(
    solver: Arc<MockDnsSolver>,
    repo: Arc<MockHostnameRepository>,
) -> SolveQuestionUseCase {
    SolveQuestionUseCase::new(solver, repo)
}

#[tokio::test]
async fn test_execute_uses_active_environment_when_unscoped() {
    let solver = Arc::new(MockDnsSolver::new());
    let repo = Arc::new(MockHostnameRepository::new());
    repo.add_env("staging").await.unwrap();
    repo.set_active_env("staging").await.unwrap();

    let question = DnsQuestion::a("github.com");
    solver.set_answer(
        "staging",
        &question,
        DnsAnswerMessage::address(&question, Ipv4Addr::new(10, 0, 0, 7)),
    );

    let use_case = make_use_case(solver.clone(), repo);
    let answer = use_case
        .execute(QueryContext::new(), &question)
        .await
        .unwrap();

    assert_eq!(answer.answers()[0].address, Ipv4Addr::new(10, 0, 0, 7));
    assert_eq!(solver.seen_envs(), vec!["staging".to_string()]);
}

#[tokio::test]
async fn test_execute_keeps_explicit_environment() {
    let solver = Arc::new(MockDnsSolver::new());
    let repo = Arc::new(MockHostnameRepository::new());
    repo.add_env("staging").await.unwrap();
    repo.set_active_env("staging").await.unwrap();

    let question = DnsQuestion::a("github.com");
    solver.set_answer(
        "",
        &question,
        DnsAnswerMessage::address(&question, Ipv4Addr::new(192, 168, 0, 1)),
    );

    let use_case = make_use_case(solver.clone(), repo);
    let ctx = QueryContext::new().with_environment("");
    let answer = use_case.execute(ctx, &question).await.unwrap();

    assert_eq!(
        answer.answers()[0].to_string(),
        "github.com.\t0\tIN\tA\t192.168.0.1"
    );
    assert_eq!(solver.seen_envs(), vec![String::new()]);
}

#[tokio::test]
async fn test_execute_propagates_not_found() {
    let solver = Arc::new(MockDnsSolver::new());
    let repo = Arc::new(MockHostnameRepository::new());

    let use_case = make_use_case(solver, repo);
    let result = use_case
        .execute(QueryContext::new(), &DnsQuestion::a("missing.example"))
        .await;

    assert_eq!(
        result.unwrap_err(),
        DomainError::NotFound("missing.example".to_string())
    );
}

#[tokio::test]
async fn test_execute_cancelled_context_never_reaches_solver() {
    let solver = Arc::new(MockDnsSolver::new());
    let repo = Arc::new(MockHostnameRepository::new());

    let use_case = make_use_case(solver.clone(), repo);
    let ctx = QueryContext::new();
    ctx.cancel();

    let result = use_case.execute(ctx, &DnsQuestion::a("github.com")).await;

    assert_eq!(result.unwrap_err(), DomainError::Cancelled);
    assert!(solver.seen_envs().is_empty());
}
