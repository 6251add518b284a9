use jsx_dns_application::ports::CacheMaintenancePort;
use jsx_dns_domain::config::CacheConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(3600);
const DEFAULT_SWEEP_JITTER: Duration = Duration::from_secs(3600);

/// Periodically drops expired response cache entries.
///
/// Each cycle waits the base interval plus a fresh random delay in
/// `[0, jitter)`, so instances started together drift apart.
pub struct CacheSweepJob {
    maintenance: Arc<dyn CacheMaintenancePort>,
    label: &'static str,
    interval: Duration,
    jitter: Duration,
    shutdown: CancellationToken,
}

impl CacheSweepJob {
    pub fn new(maintenance: Arc<dyn CacheMaintenancePort>) -> Self {
        Self {
            maintenance,
            label: "cache",
            interval: DEFAULT_SWEEP_INTERVAL,
            jitter: DEFAULT_SWEEP_JITTER,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn from_config(maintenance: Arc<dyn CacheMaintenancePort>, config: &CacheConfig) -> Self {
        Self::new(maintenance).with_interval(
            Duration::from_secs(config.sweep_interval_secs),
            Duration::from_secs(config.sweep_jitter_secs),
        )
    }

    pub fn with_interval(mut self, interval: Duration, jitter: Duration) -> Self {
        self.interval = interval;
        self.jitter = jitter;
        self
    }

    /// Name reported in log lines, e.g. the transport the cache serves.
    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn next_delay(&self) -> Duration {
        let jitter_ms = self.jitter.as_millis().min(u64::MAX as u128) as u64;
        let extra = if jitter_ms == 0 {
            0
        } else {
            fastrand::u64(0..jitter_ms)
        };
        self.interval + Duration::from_millis(extra)
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            cache = self.label,
            interval_secs = self.interval.as_secs(),
            jitter_secs = self.jitter.as_secs(),
            "Starting cache sweep job"
        );

        loop {
            let delay = self.next_delay();
            debug!(cache = self.label, delay_ms = delay.as_millis() as u64, "Next cache sweep");

            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!(cache = self.label, "CacheSweepJob: shutting down");
                    break;
                }
                _ = tokio::time::sleep(delay) => {
                    self.run_once().await;
                }
            }
        }
    }

    async fn run_once(&self) {
        match self.maintenance.sweep_expired().await {
            Ok(outcome) => {
                info!(
                    cache = self.label,
                    entries_removed = outcome.entries_removed,
                    cache_size = outcome.cache_size,
                    "Cache sweep completed"
                );
            }
            Err(e) => {
                error!(cache = self.label, error = %e, "Cache sweep failed");
            }
        }
    }
}
