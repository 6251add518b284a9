use async_trait::async_trait;
use jsx_dns_domain::DomainError;

/// Outcome of an expiry sweep.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SweepOutcome {
    pub entries_removed: usize,
    pub cache_size: usize,
}

/// Port for periodic response cache maintenance.
#[async_trait]
pub trait CacheMaintenancePort: Send + Sync {
    /// Drop every entry whose expiry time has passed.
    async fn sweep_expired(&self) -> Result<SweepOutcome, DomainError>;
}
