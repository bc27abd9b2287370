//! Incremental search configuration types.

use serde::{Deserialize, Serialize};

/// Incremental search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Pause after the last keystroke before the match set is frozen, in
    /// milliseconds (valid range: 1-60000).
    pub timeout_ms: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { timeout_ms: 800 }
    }
}
