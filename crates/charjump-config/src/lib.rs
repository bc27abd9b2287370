//! charjump configuration system.
//!
//! TOML-based configuration with validation and live reload. Every
//! section has defaults, so an empty or partial file is fine.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use charjump_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use reload::ReloadManager;
pub use schema::{CharJumpConfig, CONFIG_SCHEMA_VERSION, DEFAULT_CHARSET};
pub use watcher::ConfigWatcher;

use charjump_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path, creating it if missing.
///
/// Only IO and parse problems are errors. Values that fail [`validate`] are
/// kept as written; the engine applies its own fallbacks per key.
///
/// [`validate`]: validation::validate
pub fn load_config() -> Result<CharJumpConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from an explicit path (e.g. a `--config` override).
pub fn load_config_from(path: &Path) -> Result<CharJumpConfig, ConfigError> {
    toml_loader::load_from_path(path)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &CharJumpConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&CharJumpConfig::default());
        assert!(json.contains("\"labels\""));
        assert!(json.contains("\"search\""));
        assert!(json.contains("\"jump\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"timeout_ms\": 800"));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_from_keeps_values_that_fail_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[labels]\ncharset = \"hjklh\"\n\n[search]\ntimeout_ms = 300\n",
        )
        .unwrap();

        assert!(validation::validate(&load_config_from(&path).unwrap()).is_err());
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.labels.charset, "hjklh");
        assert_eq!(config.search.timeout_ms, 300);
    }

    #[test]
    fn load_config_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&CharJumpConfig::default());
        let parsed: CharJumpConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.labels.charset, DEFAULT_CHARSET);
        assert_eq!(parsed.search.timeout_ms, 800);
    }
}
