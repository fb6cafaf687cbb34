pub mod local;

pub use local::LocalDnsSolver;
