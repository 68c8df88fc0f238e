//! Target backend trait definition.

use crate::config::ConfigurationDocument;
use crate::errors::ConfigError;
use crate::overrides::OverrideSource;
use crate::targets::types::TargetType;

/// Trait defining the interface for deployment target backends.
///
/// Each supported target (local server, BrowserStack) implements this trait
/// to build the hub URL from its own configuration sub-document.
pub trait TargetBackend: Send + Sync {
    /// The target type this backend serves.
    fn target_type(&self) -> TargetType;

    /// The canonical name of this target (e.g., "local", "browserstack").
    fn name(&self) -> &'static str;

    /// The display name for this target (e.g., "Local Appium server").
    fn display_name(&self) -> &'static str;

    /// Configuration sub-document this target reads from.
    fn section(&self) -> &'static str;

    /// Build the automation hub URL for this target.
    fn hub_url(
        &self,
        config: &ConfigurationDocument,
        overrides: &dyn OverrideSource,
    ) -> Result<String, ConfigError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::OverrideMap;
    use serde_json::json;

    struct MockBackend;

    impl TargetBackend for MockBackend {
        fn target_type(&self) -> TargetType {
            TargetType::Local
        }

        fn name(&self) -> &'static str {
            "mock"
        }

        fn display_name(&self) -> &'static str {
            "Mock Target"
        }

        fn section(&self) -> &'static str {
            "mockEnv"
        }

        fn hub_url(
            &self,
            config: &ConfigurationDocument,
            _overrides: &dyn OverrideSource,
        ) -> Result<String, ConfigError> {
            Ok(config.section(self.section())?.string("url")?.to_string())
        }
    }

    #[test]
    fn test_target_backend_basic_methods() {
        let backend = MockBackend;
        assert_eq!(backend.name(), "mock");
        assert_eq!(backend.display_name(), "Mock Target");

        let config =
            ConfigurationDocument::from_value(json!({"mockEnv": {"url": "http://mock/wd/hub"}}))
                .unwrap();
        assert_eq!(
            backend.hub_url(&config, &OverrideMap::new()).unwrap(),
            "http://mock/wd/hub"
        );
    }
}
