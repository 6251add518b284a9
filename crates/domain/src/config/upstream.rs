use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use super::errors::ConfigError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Public resolvers for names outside every configured zone.
    #[serde(default = "default_forwarders")]
    pub forwarders: Vec<String>,

    /// Hostnames of the authoritative servers for delegated zones. Resolved
    /// once at startup through the forwarders.
    #[serde(default = "default_glue_nameservers")]
    pub glue_nameservers: Vec<String>,

    /// Timeout for a single upstream attempt.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Port used when an address is given without one.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            forwarders: default_forwarders(),
            glue_nameservers: default_glue_nameservers(),
            query_timeout_ms: default_query_timeout_ms(),
            port: default_port(),
        }
    }
}

impl UpstreamConfig {
    pub fn forwarder_addrs(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.forwarders
            .iter()
            .map(|s| parse_upstream_addr(s, self.port))
            .collect()
    }
}

/// Accepts `ip`, `ip:port` or `[v6]:port`.
pub fn parse_upstream_addr(value: &str, default_port: u16) -> Result<SocketAddr, ConfigError> {
    let value = value.trim();
    if let Ok(addr) = value.parse::<SocketAddr>() {
        return Ok(addr);
    }
    value
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, default_port))
        .map_err(|_| ConfigError::Validation(format!("Invalid upstream address: {}", value)))
}

/// Transport used for upstream queries. Fixed per nameserver instance.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Udp,

    Tcp,
}

impl TransportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Udp => "udp",
            Self::Tcp => "tcp",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_forwarders() -> Vec<String> {
    vec!["8.8.8.8".to_string(), "8.8.4.4".to_string()]
}

fn default_glue_nameservers() -> Vec<String> {
    vec![
        "NS1.GSLB13.SAKURA.NE.JP".to_string(),
        "NS2.GSLB13.SAKURA.NE.JP".to_string(),
    ]
}

fn default_query_timeout_ms() -> u64 {
    5000
}

fn default_port() -> u16 {
    53
}
