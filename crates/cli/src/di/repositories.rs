use dns_proxy_domain::Config;
use dns_proxy_infrastructure::repositories::TomlConfigRepository;
use std::sync::Arc;

pub struct Repositories {
    pub config: Arc<TomlConfigRepository>,
}

impl Repositories {
    pub fn new(config: Config, config_file: String) -> Self {
        Self {
            config: Arc::new(TomlConfigRepository::new(config, Some(config_file))),
        }
    }
}
