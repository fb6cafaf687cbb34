use super::{DnsServices, Repositories};
use dns_proxy_application::use_cases::{
    ActivateEnvironmentUseCase, CreateEnvironmentUseCase, CreateHostnameUseCase,
    DeleteEnvironmentUseCase, DeleteHostnameUseCase, ListEnvironmentsUseCase,
    ListHostnamesUseCase, SolveQuestionUseCase, UpdateHostnameUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub solve_question: Arc<SolveQuestionUseCase>,
    pub create_hostname: Arc<CreateHostnameUseCase>,
    pub update_hostname: Arc<UpdateHostnameUseCase>,
    pub delete_hostname: Arc<DeleteHostnameUseCase>,
    pub list_hostnames: Arc<ListHostnamesUseCase>,
    pub create_env: Arc<CreateEnvironmentUseCase>,
    pub delete_env: Arc<DeleteEnvironmentUseCase>,
    pub activate_env: Arc<ActivateEnvironmentUseCase>,
    pub list_envs: Arc<ListEnvironmentsUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, dns: &DnsServices) -> Self {
        Self {
            solve_question: Arc::new(SolveQuestionUseCase::new(
                dns.solver.clone(),
                repos.config.clone(),
            )),
            create_hostname: Arc::new(CreateHostnameUseCase::new(repos.config.clone())),
            update_hostname: Arc::new(UpdateHostnameUseCase::new(repos.config.clone())),
            delete_hostname: Arc::new(DeleteHostnameUseCase::new(repos.config.clone())),
            list_hostnames: Arc::new(ListHostnamesUseCase::new(repos.config.clone())),
            create_env: Arc::new(CreateEnvironmentUseCase::new(repos.config.clone())),
            delete_env: Arc::new(DeleteEnvironmentUseCase::new(repos.config.clone())),
            activate_env: Arc::new(ActivateEnvironmentUseCase::new(repos.config.clone())),
            list_envs: Arc::new(ListEnvironmentsUseCase::new(repos.config.clone())),
        }
    }
}
