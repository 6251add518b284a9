use crate::CacheSweepJob;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub struct JobRunner {
    cache_sweeps: Vec<CacheSweepJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            cache_sweeps: Vec::new(),
            shutdown: None,
        }
    }

    pub fn with_cache_sweep(mut self, job: CacheSweepJob) -> Self {
        self.cache_sweeps.push(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    /// Spawns every registered job. The handles finish once the shutdown
    /// token is cancelled.
    pub async fn start(self) -> Vec<JoinHandle<()>> {
        info!(jobs = self.cache_sweeps.len(), "Starting background job runner");

        let handles: Vec<_> = self
            .cache_sweeps
            .into_iter()
            .map(|job| {
                let job = match &self.shutdown {
                    Some(token) => job.with_cancellation(token.clone()),
                    None => job,
                };
                let job = Arc::new(job);
                tokio::spawn(async move { job.start().await })
            })
            .collect();

        info!("All background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
