//! Jump label configuration types.

use serde::{Deserialize, Serialize};

/// Symbols used to build jump labels when none are configured.
pub const DEFAULT_CHARSET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Jump label configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    /// Label alphabet. Trimmed; fewer than two symbols falls back to the default.
    pub charset: String,
    /// Idle timeout for label entry in milliseconds (0 = wait until the prompt
    /// is accepted or dismissed; valid range: 0-60000).
    pub timeout_ms: u32,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            charset: DEFAULT_CHARSET.into(),
            timeout_ms: 0,
        }
    }
}
