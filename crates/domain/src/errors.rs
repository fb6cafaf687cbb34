use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Query cancelled")]
    Cancelled,

    #[error("Hostname not found: {0}")]
    NotFound(String),

    #[error("Environment not found: {0:?}")]
    EnvironmentNotFound(String),

    #[error("Environment already exists: {0:?}")]
    EnvironmentAlreadyExists(String),

    #[error("Hostname already exists in environment {env:?}: {hostname}")]
    HostnameAlreadyExists { env: String, hostname: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Failures that a transport should report as a name error rather than a
    /// server failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }
}
