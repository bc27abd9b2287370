//! Range and charset checks for a parsed config.

mod charset;
mod helpers;
mod timing;

#[cfg(test)]
mod tests;

use crate::schema::CharJumpConfig;
use charjump_common::ConfigError;

/// Check every section. All problems are reported together, `; `-joined.
pub fn validate(config: &CharJumpConfig) -> Result<(), ConfigError> {
    let mut problems = Vec::new();
    charset::validate_charset(&mut problems, config);
    timing::validate_timeouts(&mut problems, config);

    if problems.is_empty() {
        return Ok(());
    }
    Err(ConfigError::ValidationError(problems.join("; ")))
}
