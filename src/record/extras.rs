//! Caller-supplied key/value telemetry attached to a request

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keyed extras container.
///
/// Keys are unique and the last write wins. Iteration and serialization order
/// is sorted by key, so output is deterministic regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extras(Map<String, Value>);

impl Extras {
    /// Create an empty container
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a value, returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Look up a value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Remove a value by key
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no entries have been set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Extras {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_same_key_keeps_latest() {
        let mut extras = Extras::new();
        assert!(extras.insert("colour", "red").is_none());
        assert_eq!(extras.insert("colour", "purple"), Some(json!("red")));

        assert_eq!(extras.len(), 1);
        assert_eq!(extras.get("colour"), Some(&json!("purple")));
    }

    #[test]
    fn test_iteration_order_is_sorted_and_stable() {
        let mut a = Extras::new();
        a.insert("zeta", 1);
        a.insert("alpha", 2);
        a.insert("mid", 3);

        let mut b = Extras::new();
        b.insert("mid", 3);
        b.insert("zeta", 1);
        b.insert("alpha", 2);

        let keys: Vec<&str> = a.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let extras: Extras = [("n", json!(69)), ("list", json!([1, 2, 3]))]
            .into_iter()
            .collect();
        let value = serde_json::to_value(&extras).unwrap();
        assert_eq!(value, json!({"n": 69, "list": [1, 2, 3]}));
    }

    #[test]
    fn test_remove_and_is_empty() {
        let mut extras = Extras::new();
        assert!(extras.is_empty());
        extras.insert("k", true);
        assert_eq!(extras.remove("k"), Some(json!(true)));
        assert!(extras.is_empty());
        assert!(extras.remove("k").is_none());
    }
}
