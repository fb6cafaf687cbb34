use crate::HostnameRecord;
use serde::{Deserialize, Serialize};

/// Name of the default, unscoped environment
pub const DEFAULT_ENV: &str = "";

/// A named table of hostname records
///
/// Several environments may map the same hostname to different addresses;
/// lookups are always scoped to exactly one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Environment {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub hostnames: Vec<HostnameRecord>,
}

impl Environment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hostnames: Vec::new(),
        }
    }

    pub fn find(&self, hostname: &str) -> Option<&HostnameRecord> {
        self.hostnames.iter().find(|h| h.matches(hostname))
    }

    pub fn position(&self, hostname: &str) -> Option<usize> {
        self.hostnames.iter().position(|h| h.matches(hostname))
    }
}
