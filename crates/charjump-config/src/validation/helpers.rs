//! Bounds checks shared by the section validators.

use std::ops::RangeInclusive;

/// Record `key` as invalid unless `value` lies within `bounds`.
pub(crate) fn check_bounds(errors: &mut Vec<String>, key: &str, value: u32, bounds: RangeInclusive<u32>) {
    if !bounds.contains(&value) {
        errors.push(format!(
            "{key} = {value} must be within {}..={}",
            bounds.start(),
            bounds.end()
        ));
    }
}
