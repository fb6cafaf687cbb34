use super::RecordType;
use std::sync::Arc;

/// A single question taken from an incoming DNS query.
///
/// `name` keeps the wire spelling, always terminated by the root label
/// separator (`"github.com."`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuestion {
    pub fn new(name: impl AsRef<str>, record_type: RecordType) -> Self {
        let name = name.as_ref();
        let name: Arc<str> = if name.ends_with('.') {
            Arc::from(name)
        } else {
            Arc::from(format!("{}.", name))
        };
        Self { name, record_type }
    }

    /// Address question for a bare hostname.
    pub fn a(hostname: impl AsRef<str>) -> Self {
        Self::new(hostname, RecordType::A)
    }

    /// Lookup key: the queried name without its trailing separator.
    #[inline]
    pub fn hostname(&self) -> &str {
        self.name.strip_suffix('.').unwrap_or(&self.name)
    }
}
