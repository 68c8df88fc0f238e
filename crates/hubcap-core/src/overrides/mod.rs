//! Process-level override sources.
//!
//! Resolvers never read the process environment directly. They query an
//! [`OverrideSource`] by the fixed names in
//! [`crate::config::defaults::overrides`], which keeps resolution
//! deterministic under test.
//!
//! ```rust
//! use hubcap_core::overrides::{OverrideMap, OverrideSource};
//!
//! let overrides = OverrideMap::new().with("TARGET_SUT", "browserstack");
//! assert_eq!(overrides.get("TARGET_SUT"), Some("browserstack"));
//! assert_eq!(overrides.get("TO_INSTALL"), None);
//! ```

use std::collections::BTreeMap;

use tracing::warn;

use crate::config::defaults::overrides as names;

/// Read-only lookup of optional string overrides.
pub trait OverrideSource: Send + Sync {
    /// Value of the named override, if one is set. Empty strings count as set.
    fn get(&self, name: &str) -> Option<&str>;

    /// Value of the named override, treating an empty string as unset.
    fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }
}

/// Explicit in-memory overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideMap {
    values: BTreeMap<String, String>,
}

impl OverrideMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Combine with a base source; values in `self` win.
    ///
    /// Only the recognized override names are copied from `base`.
    pub fn layered_over(&self, base: &dyn OverrideSource) -> OverrideMap {
        let mut merged = OverrideMap::new();
        for name in names::ALL {
            if let Some(value) = base.get(name) {
                merged.insert(*name, value);
            }
        }
        for (name, value) in self.iter() {
            merged.insert(name, value);
        }
        merged
    }
}

impl OverrideSource for OverrideMap {
    fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OverrideMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OverrideMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

/// Snapshot of the recognized override names taken from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    values: OverrideMap,
}

impl EnvOverrides {
    /// Read every recognized override name from the environment once.
    ///
    /// Variables that are not valid UTF-8 are skipped with a warning.
    pub fn capture() -> Self {
        let mut values = OverrideMap::new();
        for name in names::ALL {
            let Some(raw) = std::env::var_os(name) else {
                continue;
            };
            match raw.into_string() {
                Ok(value) => values.insert(*name, value),
                Err(_) => warn!(
                    event = "core.overrides.env_not_unicode",
                    name = name,
                    "Ignoring override with non-UTF-8 value"
                ),
            }
        }
        Self { values }
    }

    /// Build a snapshot from explicit `(name, value)` pairs, keeping only recognized names.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| names::ALL.contains(&k.as_str()))
            .collect();
        Self { values }
    }
}

impl OverrideSource for EnvOverrides {
    fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name)
    }
}
