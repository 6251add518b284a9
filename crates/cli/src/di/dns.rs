use crate::bootstrap;
use jsx_dns_application::ports::{AccessControlPort, Clock, SystemClock};
use jsx_dns_application::services::{AccessLog, Nameserver, NameserverLimits};
use jsx_dns_application::use_cases::HandleDnsQueryUseCase;
use jsx_dns_domain::config::{Config, TransportMode};
use jsx_dns_domain::ZoneSet;
use jsx_dns_infrastructure::dns::{
    CachePolicy, DnsServerHandler, ResponseCache, ResponseCacheMaintenance, UpstreamForwarder,
};
use jsx_dns_jobs::CacheSweepJob;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Read-only tables shared by every nameserver instance.
pub struct SharedResources {
    pub zones: Arc<ZoneSet>,
    pub acl: Arc<dyn AccessControlPort>,
    pub forwarders: Vec<SocketAddr>,
    pub glue: Vec<SocketAddr>,
}

impl SharedResources {
    pub async fn load(config: &Config) -> anyhow::Result<Self> {
        let startup = SystemClock.now_secs();

        let zones = bootstrap::load_zones(config, startup)?;
        let acl = bootstrap::load_acl(config)?;
        let forwarders = config.upstream.forwarder_addrs()?;
        let glue = bootstrap::resolve_glue(config, &forwarders).await?;

        info!(
            forwarders = forwarders.len(),
            glue = glue.len(),
            deny_rules = acl.len(),
            "Shared resources ready"
        );

        Ok(Self {
            zones: Arc::new(zones),
            acl: Arc::new(acl),
            forwarders,
            glue,
        })
    }
}

/// One nameserver instance: its upstream transport, cache and sweep job.
pub struct DnsServices {
    pub handler: DnsServerHandler,
    pub cache_sweep: CacheSweepJob,
}

impl DnsServices {
    pub fn new(config: &Config, shared: &SharedResources, mode: TransportMode) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let upstream = Arc::new(UpstreamForwarder::new(
            mode,
            Duration::from_millis(config.upstream.query_timeout_ms),
        ));
        let cache = Arc::new(ResponseCache::new(
            upstream,
            Arc::clone(&clock),
            CachePolicy::from_config(&config.cache),
        ));
        let access_log = Arc::new(AccessLog::new(
            Duration::from_secs(config.cache.access_log_window_secs),
            Duration::from_secs(config.cache.access_log_debounce_secs),
            clock,
        ));

        let nameserver = Nameserver::new(
            Arc::clone(&shared.zones),
            Arc::clone(&shared.acl),
            cache.clone(),
            access_log,
            shared.forwarders.clone(),
            shared.glue.clone(),
        )
        .with_limits(NameserverLimits {
            max_chase_depth: config.resolution.max_chase_depth,
            resolution_timeout: Duration::from_millis(config.resolution.resolution_timeout_ms),
        });

        let use_case = Arc::new(HandleDnsQueryUseCase::new(Arc::new(nameserver)));
        let maintenance = Arc::new(ResponseCacheMaintenance::new(cache));

        info!(transport = %mode, "Nameserver instance initialized");

        Self {
            handler: DnsServerHandler::new(use_case),
            cache_sweep: CacheSweepJob::from_config(maintenance, &config.cache)
                .with_label(mode.as_str()),
        }
    }
}
