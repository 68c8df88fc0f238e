//! Target type definitions.

use serde::{Deserialize, Serialize};

/// Deployment targets an automation session can run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    /// An Appium server reachable directly, usually on localhost.
    Local,
    /// The BrowserStack cloud device farm.
    BrowserStack,
}

impl TargetType {
    /// Get the canonical string name for this target type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Local => "local",
            TargetType::BrowserStack => "browserstack",
        }
    }

    /// Parse a target type from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "local" => Some(TargetType::Local),
            "browserstack" => Some(TargetType::BrowserStack),
            _ => None,
        }
    }

    /// Get all supported target types.
    pub fn all() -> &'static [TargetType] {
        &[TargetType::Local, TargetType::BrowserStack]
    }
}

impl std::fmt::Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TargetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "Unknown target '{}'. Supported: {}",
                s,
                TargetType::all()
                    .iter()
                    .map(|t| t.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }
}
