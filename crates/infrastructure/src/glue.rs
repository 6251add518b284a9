//! Startup resolution of the glue nameserver hostnames.

use futures::future::join_all;
use jsx_dns_application::ports::UpstreamPort;
use jsx_dns_domain::{DomainError, RecordData, RecordType};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::{info, warn};

pub struct GlueResolver {
    upstream: Arc<dyn UpstreamPort>,
    forwarders: Vec<SocketAddr>,
    port: u16,
}

impl GlueResolver {
    /// Hostnames are looked up through `forwarders`; the resulting addresses
    /// use `port`.
    pub fn new(upstream: Arc<dyn UpstreamPort>, forwarders: Vec<SocketAddr>, port: u16) -> Self {
        Self {
            upstream,
            forwarders,
            port,
        }
    }

    /// Resolves every hostname concurrently and keeps the first A record of
    /// each, in hostname order. Fails only when none resolves.
    pub async fn resolve(&self, hostnames: &[String]) -> Result<Vec<SocketAddr>, DomainError> {
        let lookups = hostnames
            .iter()
            .map(|host| self.upstream.query(host, RecordType::A, &self.forwarders));
        let answers = join_all(lookups).await;

        let mut addrs = Vec::with_capacity(hostnames.len());
        for (host, answer) in hostnames.iter().zip(answers) {
            let first_a = answer.answers.iter().find_map(|record| match &record.data {
                RecordData::A(ip) => Some(*ip),
                _ => None,
            });

            match first_a {
                Some(ip) => {
                    info!(nameserver = %host, address = %ip, "Glue nameserver resolved");
                    addrs.push(SocketAddr::new(IpAddr::V4(ip), self.port));
                }
                None => warn!(nameserver = %host, "Glue nameserver did not resolve"),
            }
        }

        if addrs.is_empty() && !hostnames.is_empty() {
            return Err(DomainError::GlueResolution(format!(
                "none of {} resolved",
                hostnames.join(", ")
            )));
        }

        Ok(addrs)
    }
}
