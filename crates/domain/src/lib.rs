//! DNS Proxy Domain Layer
pub mod config;
pub mod dns_answer;
pub mod dns_question;
pub mod errors;
pub mod hostname;
pub mod record_type;

pub use config::{CacheConfig, CliOverrides, Config, ConfigError, Environment};
pub use dns_answer::{AnswerRecord, DnsAnswerMessage, DnsClass};
pub use dns_question::DnsQuestion;
pub use errors::DomainError;
pub use hostname::HostnameRecord;
pub use record_type::RecordType;
