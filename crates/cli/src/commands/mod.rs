pub mod envs;
pub mod hosts;
pub mod resolve;

pub use envs::{run_envs, EnvsCommand};
pub use hosts::{run_hosts, HostsCommand};
pub use resolve::{run_resolve, ResolveArgs};
