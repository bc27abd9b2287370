//! Label charset validation.

use std::collections::HashSet;

use crate::schema::CharJumpConfig;

/// Flag charsets that would be replaced by the default or that repeat symbols.
pub(crate) fn validate_charset(errors: &mut Vec<String>, config: &CharJumpConfig) {
    let charset = config.labels.charset.trim();
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for c in charset.chars() {
        if !seen.insert(c) && !duplicates.contains(&c) {
            duplicates.push(c);
        }
    }

    if seen.len() < 2 {
        errors.push(format!(
            "labels.charset = {:?} needs at least 2 distinct symbols (the default will be used)",
            config.labels.charset
        ));
    } else if !duplicates.is_empty() {
        let repeated: String = duplicates.into_iter().collect();
        errors.push(format!(
            "labels.charset repeats symbols {repeated:?} (repeats are ignored)"
        ));
    }
}
