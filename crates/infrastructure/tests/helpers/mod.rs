#![allow(dead_code)]

mod fixtures;
mod spy_cache;

pub use fixtures::*;
pub use spy_cache::*;
