use async_trait::async_trait;
use jsx_dns_domain::{RecordType, ResourceRecord};
use std::net::SocketAddr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CachedAnswer {
    pub answers: Vec<ResourceRecord>,
    pub authorities: Option<Vec<ResourceRecord>>,
    /// False when this call went upstream to fill the entry.
    pub cache_hit: bool,
}

/// Upstream answers keyed by `(name, type)` with TTL-derived expiry.
#[async_trait]
pub trait ResponseCachePort: Send + Sync {
    /// Returns the live entry, or queries `servers` in order and stores the
    /// result when the entry is missing or expired.
    async fn get_or_fill(
        &self,
        name: &str,
        record_type: RecordType,
        servers: &[SocketAddr],
    ) -> CachedAnswer;

    fn entry_count(&self) -> usize;
}
