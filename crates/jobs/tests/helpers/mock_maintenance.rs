use async_trait::async_trait;
use jsx_dns_application::ports::{CacheMaintenancePort, SweepOutcome};
use jsx_dns_domain::DomainError;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

pub struct MockCacheMaintenancePort {
    sweep_calls: AtomicU64,
    should_fail: AtomicBool,
}

impl MockCacheMaintenancePort {
    pub fn new() -> Self {
        Self {
            sweep_calls: AtomicU64::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn sweep_call_count(&self) -> u64 {
        self.sweep_calls.load(Ordering::Relaxed)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }
}

#[async_trait]
impl CacheMaintenancePort for MockCacheMaintenancePort {
    async fn sweep_expired(&self) -> Result<SweepOutcome, DomainError> {
        self.sweep_calls.fetch_add(1, Ordering::Relaxed);
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DomainError::IoError("sweep failed".to_string()));
        }
        Ok(SweepOutcome {
            entries_removed: 1,
            cache_size: 0,
        })
    }
}
