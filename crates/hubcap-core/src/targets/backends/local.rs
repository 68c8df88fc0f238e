//! Local Appium server target.

use crate::config::ConfigurationDocument;
use crate::config::defaults::fields;
use crate::errors::ConfigError;
use crate::overrides::OverrideSource;
use crate::targets::traits::TargetBackend;
use crate::targets::types::TargetType;

/// Backend for a directly reachable Appium server.
///
/// The URL is taken verbatim from `localEnv.url`; overrides are not consulted.
pub struct LocalBackend;

impl TargetBackend for LocalBackend {
    fn target_type(&self) -> TargetType {
        TargetType::Local
    }

    fn name(&self) -> &'static str {
        "local"
    }

    fn display_name(&self) -> &'static str {
        "Local Appium server"
    }

    fn section(&self) -> &'static str {
        fields::LOCAL_ENV
    }

    fn hub_url(
        &self,
        config: &ConfigurationDocument,
        _overrides: &dyn OverrideSource,
    ) -> Result<String, ConfigError> {
        let env = config.section(self.section())?;
        Ok(env.string(fields::LOCAL_URL)?.to_string())
    }
}
