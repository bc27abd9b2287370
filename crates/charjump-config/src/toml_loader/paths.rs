//! Where the config file lives, and seeding it on first run.

use std::path::{Path, PathBuf};

use charjump_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "charjump";
const FILE_NAME: &str = "config.toml";

/// `<platform config dir>/charjump/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    match dirs::config_dir() {
        Some(base) => Ok(base.join(APP_DIR).join(FILE_NAME)),
        None => Err(ConfigError::ParseError(
            "no platform config directory for charjump".into(),
        )),
    }
}

fn io_error(action: &str, path: &Path, e: std::io::Error) -> ConfigError {
    ConfigError::ParseError(format!("cannot {action} {}: {e}", path.display()))
}

/// Write the commented default config to `path`, creating parent dirs.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| io_error("create", dir, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_error("write", path, e))?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
