//! Location data structure

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::action::NavAction;

/// A single history entry as reported by the host router.
///
/// Immutable once constructed. `search` carries the leading `?` and `hash`
/// the leading `#` (or both are empty), matching what the router emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub pathname: String,
    /// Parsed query parameters, keyed by name.
    #[serde(default)]
    pub query: HashMap<String, String>,
    /// Raw query string, including the leading `?`. Empty when there is none.
    #[serde(default)]
    pub search: String,
    /// Fragment identifier, including the leading `#`. Empty when there is none.
    #[serde(default)]
    pub hash: String,
    /// History entry state attached by the host. `Value::Null` when absent.
    #[serde(default)]
    pub state: Value,
    pub action: NavAction,
    /// Index in the history stack, when the router reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    /// Index change produced by this navigation (`-1` for a single Back).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<i64>,
    /// Router-assigned entry key. Empty for the initial location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Location {
    pub fn new(pathname: impl Into<String>, action: NavAction) -> Self {
        Self {
            pathname: pathname.into(),
            query: HashMap::new(),
            search: String::new(),
            hash: String::new(),
            state: Value::Null,
            action,
            index: None,
            delta: None,
            key: None,
        }
    }

    /// Relative URL for this location: pathname + search + hash.
    pub fn url(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }

    /// Whether both locations refer to the same history entry.
    ///
    /// Router-assigned keys are authoritative when both sides carry one;
    /// otherwise falls back to comparing pathname + search + hash.
    pub fn same_entry(&self, other: &Location) -> bool {
        if let (Some(a), Some(b)) = (&self.key, &other.key) {
            return a == b;
        }
        self.pathname == other.pathname && self.search == other.search && self.hash == other.hash
    }

    /// Whether the only difference from `other` is the fragment identifier.
    /// This is what anchor-link navigation within a page looks like.
    pub fn same_ignoring_hash(&self, other: &Location) -> bool {
        self.pathname == other.pathname && self.search == other.search
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url() {
        let mut location = Location::new("/users/42", NavAction::Push);
        location.search = "?tab=posts".to_string();
        location.hash = "#comments".to_string();
        assert_eq!(location.url(), "/users/42?tab=posts#comments");

        assert_eq!(Location::new("/", NavAction::Pop).url(), "/");
    }

    #[test]
    fn test_same_entry_prefers_keys() {
        let mut a = Location::new("/a", NavAction::Push);
        a.key = Some("k1".to_string());
        let mut b = Location::new("/b", NavAction::Pop);
        b.key = Some("k1".to_string());

        // Same router key means same history entry, whatever the path says.
        assert!(a.same_entry(&b));

        b.key = Some("k2".to_string());
        assert!(!a.same_entry(&b));
    }

    #[test]
    fn test_same_entry_falls_back_to_url_parts() {
        let a = Location::new("/a", NavAction::Push);
        let b = Location::new("/a", NavAction::Pop);
        assert!(a.same_entry(&b));

        let mut c = Location::new("/a", NavAction::Pop);
        c.hash = "#top".to_string();
        assert!(!a.same_entry(&c));
    }

    #[test]
    fn test_same_ignoring_hash() {
        let a = Location::new("/a", NavAction::Push);
        let mut b = Location::new("/a", NavAction::Push);
        b.hash = "#section".to_string();
        assert!(a.same_ignoring_hash(&b));

        let mut c = Location::new("/a", NavAction::Push);
        c.search = "?q=1".to_string();
        assert!(!a.same_ignoring_hash(&c));
    }
}
