//! Capability set type.

use serde::Serialize;
use serde_json::{Map, Value};

/// Ordered mapping from capability name to value.
///
/// Serializes as a plain JSON object with keys in insertion order. Setting an
/// existing key replaces its value and keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CapabilitySet {
    entries: Map<String, Value>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_replaces_in_place() {
        let mut caps = CapabilitySet::new();
        caps.set("platformName", json!("Android"));
        caps.set("deviceName", json!("Pixel"));
        caps.set("platformName", json!("iOS"));

        assert_eq!(caps.len(), 2);
        assert_eq!(caps.get("platformName"), Some(&json!("iOS")));
        assert_eq!(caps.keys().collect::<Vec<_>>(), vec!["platformName", "deviceName"]);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut caps = CapabilitySet::new();
        caps.set("deviceName", json!("Pixel"));
        caps.set("appPackage", json!("com.example.app"));

        assert_eq!(
            serde_json::to_string(&caps).unwrap(),
            r#"{"deviceName":"Pixel","appPackage":"com.example.app"}"#
        );
    }
}
