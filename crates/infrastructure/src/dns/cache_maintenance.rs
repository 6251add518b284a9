use super::cache::ResponseCache;

use async_trait::async_trait;
use jsx_dns_application::ports::{CacheMaintenancePort, SweepOutcome};
use jsx_dns_domain::DomainError;
use std::sync::Arc;

/// Infrastructure adapter implementing `CacheMaintenancePort`.
pub struct ResponseCacheMaintenance {
    cache: Arc<ResponseCache>,
}

impl ResponseCacheMaintenance {
    pub fn new(cache: Arc<ResponseCache>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl CacheMaintenancePort for ResponseCacheMaintenance {
    async fn sweep_expired(&self) -> Result<SweepOutcome, DomainError> {
        let entries_removed = self.cache.sweep_expired();

        Ok(SweepOutcome {
            entries_removed,
            cache_size: self.cache.len(),
        })
    }
}
