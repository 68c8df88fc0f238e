//! Configuration document types.
//!
//! The configuration file is kept as an owned JSON tree rather than a typed
//! struct: which fields are required depends on the resolution branch, so
//! presence is checked at lookup time and reported as
//! [`ConfigError::MissingField`].
//!
//! # Example Configuration
//!
//! ```json
//! {
//!   "platformName": "Android",
//!   "platformVersion": "13",
//!   "deviceName": "Pixel 7",
//!   "appLocation": "/builds/app-debug.apk",
//!   "appActivity": ".MainActivity",
//!   "appPackage": "com.example.app",
//!   "localEnv": { "url": "http://127.0.0.1:4723/wd/hub" },
//!   "BrowserStackEnv": {
//!     "username": "user",
//!     "access_key": "key",
//!     "server": "hub-cloud.browserstack.com"
//!   }
//! }
//! ```

use serde_json::{Map, Value};

use crate::errors::ConfigError;

/// The static configuration document, loaded once and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationDocument {
    root: Map<String, Value>,
}

impl ConfigurationDocument {
    pub fn new(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Build a document from a JSON value. Returns `None` unless the value is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(root) => Some(Self::new(root)),
            _ => None,
        }
    }

    /// Look up a top-level field of any JSON type.
    pub fn field(&self, name: &str) -> Result<&Value, ConfigError> {
        self.root.get(name).ok_or_else(|| ConfigError::missing(name))
    }

    /// Look up a named environment sub-document such as `localEnv`.
    pub fn section<'a>(&'a self, name: &'a str) -> Result<Section<'a>, ConfigError> {
        match self.root.get(name) {
            Some(Value::Object(map)) => Ok(Section { name, map }),
            Some(_) => Err(ConfigError::InvalidField {
                field: name.to_string(),
                expected: "an object",
            }),
            None => Err(ConfigError::missing(name)),
        }
    }
}

/// A borrowed view of one environment sub-document.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    name: &'a str,
    map: &'a Map<String, Value>,
}

impl<'a> Section<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Look up a string field. Errors name the dotted path, e.g. `localEnv.url`.
    pub fn string(&self, key: &str) -> Result<&'a str, ConfigError> {
        match self.map.get(key) {
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(_) => Err(ConfigError::InvalidField {
                field: self.path(key),
                expected: "a string",
            }),
            None => Err(ConfigError::missing(self.path(key))),
        }
    }

    fn path(&self, key: &str) -> String {
        format!("{}.{}", self.name, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> ConfigurationDocument {
        ConfigurationDocument::from_value(value).unwrap()
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(ConfigurationDocument::from_value(json!([1, 2])).is_none());
        assert!(ConfigurationDocument::from_value(json!("text")).is_none());
        assert!(ConfigurationDocument::from_value(json!({})).is_some());
    }

    #[test]
    fn test_field_returns_any_json_type() {
        let config = doc(json!({"platformVersion": 13, "deviceName": {"model": "Pixel"}}));
        assert_eq!(config.field("platformVersion").unwrap(), &json!(13));
        assert_eq!(
            config.field("deviceName").unwrap(),
            &json!({"model": "Pixel"})
        );
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let config = doc(json!({}));
        match config.field("appPackage") {
            Err(ConfigError::MissingField { field }) => assert_eq!(field, "appPackage"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_section_errors() {
        let config = doc(json!({"localEnv": "http://nope"}));
        assert!(matches!(
            config.section("localEnv"),
            Err(ConfigError::InvalidField { .. })
        ));
        match config.section("BrowserStackEnv") {
            Err(ConfigError::MissingField { field }) => assert_eq!(field, "BrowserStackEnv"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_section_string_uses_dotted_path() {
        let config = doc(json!({"localEnv": {"url": 4723}}));
        let section = config.section("localEnv").unwrap();
        assert_eq!(section.name(), "localEnv");
        match section.string("url") {
            Err(ConfigError::InvalidField { field, expected }) => {
                assert_eq!(field, "localEnv.url");
                assert_eq!(expected, "a string");
            }
            other => panic!("expected InvalidField, got {:?}", other),
        }
        match section.string("missing") {
            Err(ConfigError::MissingField { field }) => assert_eq!(field, "localEnv.missing"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }
}
