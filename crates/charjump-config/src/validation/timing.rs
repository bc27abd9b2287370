//! Stage timeouts.

use crate::schema::CharJumpConfig;

use super::helpers::check_bounds;

const MAX_TIMEOUT_MS: u32 = 60_000;

/// The search stage needs a real debounce window; the label stage may
/// disable its idle timeout with 0.
pub(crate) fn validate_timeouts(errors: &mut Vec<String>, config: &CharJumpConfig) {
    check_bounds(errors, "search.timeout_ms", config.search.timeout_ms, 1..=MAX_TIMEOUT_MS);
    check_bounds(errors, "labels.timeout_ms", config.labels.timeout_ms, 0..=MAX_TIMEOUT_MS);
}
