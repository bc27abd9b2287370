use std::io::ErrorKind;
use std::path::Path;

use charjump_common::ConfigError;
use tracing::{debug, info, warn};

use super::paths::{create_default_config, default_config_path};
use crate::schema::CharJumpConfig;
use crate::validation;

/// Read and parse the config at `path`.
///
/// Missing keys take their defaults. Values that fail validation are logged
/// and kept, so a typo in one key does not throw away the rest of the file.
pub fn load_from_path(path: &Path) -> Result<CharJumpConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "cannot read {}: {e}",
                path.display()
            )))
        }
    };

    let config: CharJumpConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    if let Err(e) = validation::validate(&config) {
        warn!("{e} (keeping the values as written)");
    }
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Load the config from [`default_config_path`], seeding the file with the
/// commented template on first run.
pub fn load_default() -> Result<CharJumpConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!(path = %path.display(), "no config yet, writing defaults");
            create_default_config(&path)?;
            Ok(CharJumpConfig::default())
        }
        loaded => loaded,
    }
}
