//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = CharJumpConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_search_timeout() {
    let mut config = CharJumpConfig::default();
    config.search.timeout_ms = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("search.timeout_ms"));
}

#[test]
fn catches_huge_label_timeout() {
    let mut config = CharJumpConfig::default();
    config.labels.timeout_ms = 120_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("labels.timeout_ms"));
}

#[test]
fn label_timeout_zero_is_allowed() {
    let mut config = CharJumpConfig::default();
    config.labels.timeout_ms = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_single_symbol_charset() {
    let mut config = CharJumpConfig::default();
    config.labels.charset = "  a ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("labels.charset"));
    assert!(err.contains("at least 2"));
}

#[test]
fn catches_repeated_symbols() {
    let mut config = CharJumpConfig::default();
    config.labels.charset = "abca".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("repeats"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = CharJumpConfig::default();
    config.labels.charset = String::new();
    config.search.timeout_ms = 90_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("labels.charset"));
    assert!(err.contains("search.timeout_ms"));
    assert!(err.contains("; "));
}
