use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Static hostname-to-address mapping
///
/// Records live inside an environment in the configuration file. The
/// environment name is not stored per record on disk; it is filled in when a
/// record is handed out by the configuration store.
///
/// `ttl` controls how long the computed answer stays in the answer cache.
/// It is never written on the wire, local answers always carry TTL 0.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HostnameRecord {
    /// Identifier assigned by the configuration store
    #[serde(default)]
    pub id: u64,

    /// Hostname without trailing dot (e.g. "github.com")
    pub hostname: String,

    #[serde(skip)]
    pub environment: String,

    /// Cache lifetime in seconds
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    pub ip: Ipv4Addr,
}

fn default_ttl() -> u32 {
    300
}

impl HostnameRecord {
    pub fn new(hostname: impl Into<String>, ip: Ipv4Addr, ttl: u32) -> Self {
        Self {
            id: 0,
            hostname: hostname.into(),
            environment: String::new(),
            ttl,
            ip,
        }
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Hostnames compare case-insensitively, ignoring a trailing dot.
    pub fn matches(&self, hostname: &str) -> bool {
        let hostname = hostname.strip_suffix('.').unwrap_or(hostname);
        self.hostname.eq_ignore_ascii_case(hostname)
    }

    pub fn validate(&self) -> Result<(), String> {
        let trimmed = self.hostname.trim();
        if trimmed.is_empty() {
            return Err("Hostname cannot be empty".to_string());
        }
        if trimmed != self.hostname {
            return Err(format!(
                "Hostname '{}' has leading or trailing whitespace",
                self.hostname
            ));
        }
        if self.hostname.ends_with('.') {
            return Err(format!(
                "Hostname '{}' must not end with '.'",
                self.hostname
            ));
        }
        Ok(())
    }
}
