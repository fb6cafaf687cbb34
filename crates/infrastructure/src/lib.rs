//! DNS Proxy Infrastructure Layer
pub mod dns;
pub mod repositories;
