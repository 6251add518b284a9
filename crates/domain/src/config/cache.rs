use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_a_record_ttl_floor")]
    pub a_record_ttl_floor: u32,

    /// Lifetime of an entry that carries no A record.
    #[serde(default = "default_negative_ttl")]
    pub negative_ttl: u32,

    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,

    /// Upper bound of the random delay added to the sweep interval.
    #[serde(default = "default_sweep_jitter_secs")]
    pub sweep_jitter_secs: u64,

    #[serde(default = "default_access_log_window_secs")]
    pub access_log_window_secs: u64,

    #[serde(default = "default_access_log_debounce_secs")]
    pub access_log_debounce_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            a_record_ttl_floor: default_a_record_ttl_floor(),
            negative_ttl: default_negative_ttl(),
            sweep_interval_secs: default_sweep_interval_secs(),
            sweep_jitter_secs: default_sweep_jitter_secs(),
            access_log_window_secs: default_access_log_window_secs(),
            access_log_debounce_secs: default_access_log_debounce_secs(),
        }
    }
}

fn default_a_record_ttl_floor() -> u32 {
    1200
}

fn default_negative_ttl() -> u32 {
    120
}

fn default_sweep_interval_secs() -> u64 {
    3600
}

fn default_sweep_jitter_secs() -> u64 {
    3600
}

fn default_access_log_window_secs() -> u64 {
    3600
}

fn default_access_log_debounce_secs() -> u64 {
    60
}
