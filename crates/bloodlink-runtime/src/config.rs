//! Runtime configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the coordination runtime.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Dashboard refresh interval in seconds. Cross-actor visibility is
    /// polling-based, so staleness up to one interval is expected.
    pub poll_interval_secs: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 5,
        }
    }
}

impl RuntimeConfig {
    /// Reads overrides from the environment (`BL_POLL_INTERVAL_SECS`).
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(secs) = std::env::var("BL_POLL_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.poll_interval_secs = secs;
        }
        config
    }
}
