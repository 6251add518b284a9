use anyhow::Context;
use jsx_dns_application::ports::UpstreamPort;
use jsx_dns_domain::config::{Config, TransportMode};
use jsx_dns_domain::ZoneSet;
use jsx_dns_infrastructure::acl::{AclLoader, DenyList};
use jsx_dns_infrastructure::dns::UpstreamForwarder;
use jsx_dns_infrastructure::glue::GlueResolver;
use jsx_dns_infrastructure::zones::ZoneLoader;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// The TXT version record of every zone carries the crate version.
pub fn load_zones(config: &Config, startup_unix_secs: u64) -> anyhow::Result<ZoneSet> {
    let authority = config.authority.to_record(startup_unix_secs);
    let loader = ZoneLoader::new(authority, env!("CARGO_PKG_VERSION"));

    let zones = loader
        .load(&config.zones)
        .with_context(|| format!("Failed to load zones from {}", config.zones.directory))?;

    info!(
        directory = %config.zones.directory,
        zones = zones.len(),
        "Static zones loaded"
    );
    Ok(zones)
}

pub fn load_acl(config: &Config) -> anyhow::Result<DenyList> {
    AclLoader::load(&config.acl).context("Failed to load deny lists")
}

/// Glue hostnames are resolved once over UDP through the forwarders.
pub async fn resolve_glue(
    config: &Config,
    forwarders: &[SocketAddr],
) -> anyhow::Result<Vec<SocketAddr>> {
    let upstream: Arc<dyn UpstreamPort> = Arc::new(UpstreamForwarder::new(
        TransportMode::Udp,
        Duration::from_millis(config.upstream.query_timeout_ms),
    ));
    let resolver = GlueResolver::new(upstream, forwarders.to_vec(), config.upstream.port);

    resolver
        .resolve(&config.upstream.glue_nameservers)
        .await
        .context("Failed to resolve glue nameservers")
}
