use serde::{Deserialize, Serialize};
use std::fmt;

/// Short random id (8 hex chars) used to correlate log lines.
pub fn new_correlation_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}

/// Identifies one navigation attempt from trigger to outcome. Shows up as
/// the `id` field of the `navigation` tracing span.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationId(String);

impl NavigationId {
    pub fn new() -> Self {
        Self(new_correlation_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NavigationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NavigationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_ids_are_8_hex_chars() {
        let cid = new_correlation_id();
        assert_eq!(cid.len(), 8);
        assert!(cid.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn successive_ids_differ() {
        assert_ne!(NavigationId::new(), NavigationId::new());
    }

    #[test]
    fn navigation_id_displays_bare() {
        let id = NavigationId::new();
        assert_eq!(id.to_string(), id.as_str());
    }

    #[test]
    fn navigation_id_serializes_as_string() {
        let id = NavigationId::default();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_str()));
        let back: NavigationId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
