pub mod config;
pub mod logging;

pub use config::{config_file, load_config, log_config_summary};
pub use logging::init_logging;
