use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolutionConfig {
    /// Nested CNAME hops followed before the chase gives up.
    #[serde(default = "default_max_chase_depth")]
    pub max_chase_depth: usize,

    /// Deadline for one client query, across every upstream retry and chase.
    #[serde(default = "default_resolution_timeout_ms")]
    pub resolution_timeout_ms: u64,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            max_chase_depth: default_max_chase_depth(),
            resolution_timeout_ms: default_resolution_timeout_ms(),
        }
    }
}

fn default_max_chase_depth() -> usize {
    16
}

fn default_resolution_timeout_ms() -> u64 {
    30_000
}
