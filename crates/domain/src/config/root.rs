use serde::{Deserialize, Serialize};

use super::acl::AclConfig;
use super::authority::AuthorityConfig;
use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolution::ResolutionConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;
use super::zones::ZonesConfig;

/// Main configuration structure for jsx-dns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Forwarders, glue nameservers and per-attempt timeout
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// CNAME chase and per-query ceilings
    #[serde(default)]
    pub resolution: ResolutionConfig,

    /// Response cache policy
    #[serde(default)]
    pub cache: CacheConfig,

    /// Static zone data
    #[serde(default)]
    pub zones: ZonesConfig,

    /// Deny-list files
    #[serde(default)]
    pub acl: AclConfig,

    /// Default SOA used as authority for static answers
    #[serde(default)]
    pub authority: AuthorityConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. jsx-dns.toml in current directory
    /// 3. /etc/jsx-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("jsx-dns.toml").exists() {
            Self::from_file("jsx-dns.toml")?
        } else if std::path::Path::new("/etc/jsx-dns/config.toml").exists() {
            Self::from_file("/etc/jsx-dns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(dir) = overrides.zones_directory {
            self.zones.directory = dir;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.upstream.forwarders.is_empty() {
            return Err(ConfigError::Validation(
                "No forwarders configured".to_string(),
            ));
        }

        self.upstream.forwarder_addrs()?;

        if self.upstream.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "upstream.query_timeout_ms cannot be 0".to_string(),
            ));
        }

        if self.resolution.max_chase_depth == 0 {
            return Err(ConfigError::Validation(
                "resolution.max_chase_depth must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub zones_directory: Option<String>,
    pub log_level: Option<String>,
}
