//! Configuration schema types for charjump.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod jump;
mod labels;
mod logging;
mod search;

pub use jump::*;
pub use labels::*;
pub use logging::*;
pub use search::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct CharJumpConfig {
    pub labels: LabelsConfig,
    pub search: SearchConfig,
    pub jump: JumpConfig,
    pub logging: LoggingConfig,
}
