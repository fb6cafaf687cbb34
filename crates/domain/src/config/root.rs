use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::cache::CacheConfig;
use super::environment::{Environment, DEFAULT_ENV};
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use crate::HostnameRecord;

/// Main configuration structure for DNS Proxy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Environment used when a request does not name one
    #[serde(default)]
    pub active_env: String,

    /// Answer cache sizing
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Hostname tables, one per environment
    #[serde(default = "default_envs")]
    pub envs: Vec<Environment>,
}

fn default_envs() -> Vec<Environment> {
    vec![Environment::new(DEFAULT_ENV)]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            active_env: DEFAULT_ENV.to_string(),
            cache: CacheConfig::default(),
            logging: LoggingConfig::default(),
            envs: default_envs(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dns-proxy.toml in current directory
    /// 3. /etc/dns-proxy/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        config.normalize_envs();
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.normalize_envs();
        Ok(config)
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(max_entries) = overrides.cache_max_entries {
            self.cache.max_entries = max_entries;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(env) = overrides.active_env {
            self.active_env = env;
        }
    }

    /// Normalize environment tables
    ///
    /// The default environment always exists, and every record knows the
    /// environment it belongs to.
    pub fn normalize_envs(&mut self) {
        if self.env(DEFAULT_ENV).is_none() {
            self.envs.insert(0, Environment::new(DEFAULT_ENV));
        }
        for env in &mut self.envs {
            for record in &mut env.hostnames {
                record.environment = env.name.clone();
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.max_entries == 0 {
            return Err(ConfigError::Validation(
                "Cache max_entries cannot be 0".to_string(),
            ));
        }

        let mut names = HashSet::new();
        for env in &self.envs {
            if !names.insert(env.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "Environment '{}' is defined more than once",
                    env.name
                )));
            }

            let mut hostnames = HashSet::new();
            for record in &env.hostnames {
                record.validate().map_err(ConfigError::Validation)?;
                if !hostnames.insert(record.hostname.to_ascii_lowercase()) {
                    return Err(ConfigError::Validation(format!(
                        "Hostname '{}' is defined more than once in environment '{}'",
                        record.hostname, env.name
                    )));
                }
            }
        }

        if self.env(&self.active_env).is_none() {
            return Err(ConfigError::Validation(format!(
                "Active environment '{}' does not exist",
                self.active_env
            )));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("dns-proxy.toml").exists() {
            Some("dns-proxy.toml".to_string())
        } else if std::path::Path::new("/etc/dns-proxy/config.toml").exists() {
            Some("/etc/dns-proxy/config.toml".to_string())
        } else {
            None
        }
    }

    pub fn env(&self, name: &str) -> Option<&Environment> {
        self.envs.iter().find(|e| e.name == name)
    }

    pub fn env_mut(&mut self, name: &str) -> Option<&mut Environment> {
        self.envs.iter_mut().find(|e| e.name == name)
    }

    pub fn find_hostname(&self, hostname: &str, env: &str) -> Option<&HostnameRecord> {
        self.env(env).and_then(|e| e.find(hostname))
    }

    /// Next free record id across all environments
    pub fn next_hostname_id(&self) -> u64 {
        self.envs
            .iter()
            .flat_map(|e| e.hostnames.iter())
            .map(|h| h.id)
            .max()
            .unwrap_or(0)
            + 1
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub cache_max_entries: Option<usize>,
    pub log_level: Option<String>,
    pub active_env: Option<String>,
}
