//! Cursor placement configuration types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpConfig {
    /// Keep the selection anchor and move only the active end.
    pub extend_selection: bool,
}
