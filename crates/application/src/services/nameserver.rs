use async_trait::async_trait;
use futures::future::{join_all, BoxFuture, FutureExt};
use jsx_dns_domain::{DenyRedirect, DnsQuery, RecordType, ZoneSet};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::{AccessLog, ResolutionContext};
use crate::ports::{AccessControlPort, DnsResolver, Resolution, ResponseCachePort};

/// Ceilings on a single top-level resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameserverLimits {
    pub max_chase_depth: usize,
    pub resolution_timeout: Duration,
}

impl Default for NameserverLimits {
    fn default() -> Self {
        Self {
            max_chase_depth: 16,
            resolution_timeout: Duration::from_secs(30),
        }
    }
}

/// Resolution engine: deny-list, static zones, cached upstream lookups and
/// the CNAME chase, for one transport instance.
pub struct Nameserver {
    zones: Arc<ZoneSet>,
    acl: Arc<dyn AccessControlPort>,
    cache: Arc<dyn ResponseCachePort>,
    access_log: Arc<AccessLog>,
    forwarders: Arc<[SocketAddr]>,
    glue: Arc<[SocketAddr]>,
    limits: NameserverLimits,
}

impl Nameserver {
    pub fn new(
        zones: Arc<ZoneSet>,
        acl: Arc<dyn AccessControlPort>,
        cache: Arc<dyn ResponseCachePort>,
        access_log: Arc<AccessLog>,
        forwarders: Vec<SocketAddr>,
        glue: Vec<SocketAddr>,
    ) -> Self {
        Self {
            zones,
            acl,
            cache,
            access_log,
            forwarders: forwarders.into(),
            glue: glue.into(),
            limits: NameserverLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: NameserverLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Resolves one question. Deadline expiry keeps the answers gathered so
    /// far.
    pub async fn lookup(&self, name: &str, record_type: RecordType) -> Resolution {
        let ctx = ResolutionContext::new();
        let resolution = self.resolve_into(name, record_type, &ctx, 0);

        if tokio::time::timeout(self.limits.resolution_timeout, resolution)
            .await
            .is_err()
        {
            warn!(
                domain = %name,
                record_type = %record_type,
                timeout_ms = self.limits.resolution_timeout.as_millis() as u64,
                answers = ctx.answer_count(),
                "Resolution deadline reached"
            );
        }

        ctx.into_resolution()
    }

    fn resolve_into<'a>(
        &'a self,
        name: &'a str,
        record_type: RecordType,
        ctx: &'a ResolutionContext,
        depth: usize,
    ) -> BoxFuture<'a, ()> {
        async move {
            if !ctx.mark_visited(name) {
                warn!(domain = %name, "CNAME loop detected");
                return;
            }

            if self.acl.is_denied(name) {
                let redirect = DenyRedirect::for_name(name);
                debug!(domain = %name, target = redirect.name, "Denied by ACL");
                ctx.push_answer(redirect.seed);
                return self
                    .resolve_into(redirect.name, redirect.record_type, ctx, depth + 1)
                    .await;
            }

            let Some((zone, found)) = self.zones.lookup_static(name, record_type) else {
                // Upstream answers are complete; no chase after this.
                self.resolve_dynamic(name, record_type, ctx).await;
                return;
            };

            let owner: Arc<str> = Arc::from(name);
            ctx.extend_answers(found.records.iter().map(|r| r.named(&owner)));
            ctx.set_authorities_if_absent(|| vec![zone.authority().clone()]);

            let query = DnsQuery::new(Arc::clone(&owner), record_type);
            if self.access_log.touch(&query.to_string()) {
                info!(query = %query, zone = zone.apex(), "Static resolver");
            }

            // MX data is already structured, and only A answers are chased.
            if record_type != RecordType::A {
                return;
            }

            let targets = ctx.take_unresolved_aliases();
            if targets.is_empty() {
                return;
            }
            if depth >= self.limits.max_chase_depth {
                warn!(
                    domain = %name,
                    depth,
                    pending = targets.len(),
                    "CNAME chase depth exceeded"
                );
                return;
            }

            let chases = targets
                .iter()
                .map(|target| self.resolve_into(target, RecordType::A, ctx, depth + 1));
            join_all(chases).await;
        }
        .boxed()
    }

    async fn resolve_dynamic(&self, name: &str, record_type: RecordType, ctx: &ResolutionContext) {
        let (servers, via) = if self.zones.is_delegated(name) {
            (&self.glue, "glue")
        } else {
            (&self.forwarders, "forwarder")
        };

        let cached = self.cache.get_or_fill(name, record_type, servers).await;

        if !cached.cache_hit {
            let query = DnsQuery::new(name, record_type);
            if self.access_log.touch(&query.to_string()) {
                info!(query = %query, via, answers = cached.answers.len(), "Query resolver");
            }
        }

        ctx.extend_answers(cached.answers);
        ctx.replace_authorities(cached.authorities);
    }
}

#[async_trait]
impl DnsResolver for Nameserver {
    async fn resolve(&self, query: &DnsQuery) -> Resolution {
        self.lookup(&query.domain, query.record_type).await
    }
}
