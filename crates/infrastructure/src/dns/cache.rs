mod entry;
mod key;
mod policy;

pub use entry::CacheEntry;
pub use key::CacheKey;
pub use policy::CachePolicy;

use async_trait::async_trait;
use dashmap::DashMap;
use jsx_dns_application::ports::{CachedAnswer, Clock, ResponseCachePort, UpstreamPort};
use jsx_dns_domain::RecordType;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::debug;

/// Upstream answers keyed by `(name, type)`, filled on miss.
///
/// Concurrent misses for one key may each go upstream; the last write wins.
pub struct ResponseCache {
    entries: DashMap<CacheKey, CacheEntry>,
    upstream: Arc<dyn UpstreamPort>,
    clock: Arc<dyn Clock>,
    policy: CachePolicy,
}

impl ResponseCache {
    pub fn new(
        upstream: Arc<dyn UpstreamPort>,
        clock: Arc<dyn Clock>,
        policy: CachePolicy,
    ) -> Self {
        Self {
            entries: DashMap::new(),
            upstream,
            clock,
            policy,
        }
    }

    pub fn get(&self, name: &str, record_type: RecordType) -> Option<CacheEntry> {
        let now = self.clock.now_secs();
        self.entries
            .get(&CacheKey::new(name, record_type))
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.value().clone())
    }

    /// Removes every expired entry and returns how many were dropped.
    pub fn sweep_expired(&self) -> usize {
        let now = self.clock.now_secs();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before.saturating_sub(self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl ResponseCachePort for ResponseCache {
    async fn get_or_fill(
        &self,
        name: &str,
        record_type: RecordType,
        servers: &[SocketAddr],
    ) -> CachedAnswer {
        if let Some(entry) = self.get(name, record_type) {
            return CachedAnswer {
                answers: entry.answers,
                authorities: entry.authorities,
                cache_hit: true,
            };
        }

        let now = self.clock.now_secs();
        let mut fetched = self.upstream.query(name, record_type, servers).await;
        let expires_in = self.policy.apply(&mut fetched.answers);

        debug!(
            domain = %name,
            record_type = %record_type,
            answers = fetched.answers.len(),
            expires_in,
            "Cache filled"
        );

        self.entries.insert(
            CacheKey::new(name, record_type),
            CacheEntry {
                answers: fetched.answers.clone(),
                authorities: fetched.authorities.clone(),
                expires_at: now + expires_in,
            },
        );

        CachedAnswer {
            answers: fetched.answers,
            authorities: fetched.authorities,
            cache_hit: false,
        }
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
