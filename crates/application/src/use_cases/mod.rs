pub mod environments;
pub mod hostnames;
pub mod solve_question;

pub use environments::{
    ActivateEnvironmentUseCase, CreateEnvironmentUseCase, DeleteEnvironmentUseCase,
    ListEnvironmentsUseCase,
};
pub use hostnames::{
    CreateHostnameUseCase, DeleteHostnameUseCase, ListHostnamesUseCase, UpdateHostnameUseCase,
};
pub use solve_question::SolveQuestionUseCase;
