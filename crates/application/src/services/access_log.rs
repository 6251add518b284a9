use dashmap::DashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::ports::Clock;

/// Last access time per `"name (TYPE)"` key. Only used to keep the
/// informational resolver log down to one line per key per window.
///
/// Stale keys are purged by a debounced sweep that fires `debounce` after
/// the most recent access; every access re-arms it.
pub struct AccessLog {
    entries: Arc<DashMap<String, u64>>,
    window_secs: u64,
    debounce: Duration,
    clock: Arc<dyn Clock>,
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl AccessLog {
    pub fn new(window: Duration, debounce: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            window_secs: window.as_secs(),
            debounce,
            clock,
            sweeper: Mutex::new(None),
        }
    }

    /// Records an access and returns true when `key` had not been seen
    /// within the window.
    pub fn touch(&self, key: &str) -> bool {
        let now = self.clock.now_secs();
        let previous = self.entries.insert(key.to_string(), now);
        self.rearm_sweep();

        match previous {
            Some(last) => now.saturating_sub(last) > self.window_secs,
            None => true,
        }
    }

    /// Removes keys not accessed within the window.
    pub fn sweep(&self) -> usize {
        purge(&self.entries, self.clock.as_ref(), self.window_secs)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn rearm_sweep(&self) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            return;
        };

        let entries = Arc::clone(&self.entries);
        let clock = Arc::clone(&self.clock);
        let window_secs = self.window_secs;
        let debounce = self.debounce;

        let mut slot = self.sweeper.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(pending) = slot.take() {
            pending.abort();
        }
        *slot = Some(runtime.spawn(async move {
            tokio::time::sleep(debounce).await;
            let removed = purge(&entries, clock.as_ref(), window_secs);
            if removed > 0 {
                debug!(removed, remaining = entries.len(), "Access log swept");
            }
        }));
    }
}

impl Drop for AccessLog {
    fn drop(&mut self) {
        let slot = self.sweeper.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(pending) = slot.take() {
            pending.abort();
        }
    }
}

fn purge(entries: &DashMap<String, u64>, clock: &dyn Clock, window_secs: u64) -> usize {
    let now = clock.now_secs();
    let before = entries.len();
    entries.retain(|_, last| now.saturating_sub(*last) <= window_secs);
    before.saturating_sub(entries.len())
}
