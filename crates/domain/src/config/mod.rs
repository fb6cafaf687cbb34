//! Configuration module for DNS Proxy
//!
//! - `root`: Main configuration and CLI overrides
//! - `cache`: Answer cache sizing
//! - `environment`: Named hostname tables
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod environment;
pub mod errors;
pub mod logging;
pub mod root;

pub use cache::CacheConfig;
pub use environment::{Environment, DEFAULT_ENV};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
