//! BrowserStack cloud target.

use crate::config::ConfigurationDocument;
use crate::config::defaults::{fields, overrides as names};
use crate::errors::ConfigError;
use crate::overrides::OverrideSource;
use crate::targets::traits::TargetBackend;
use crate::targets::types::TargetType;

/// Backend for the BrowserStack device farm.
///
/// Credentials come from the `BROWSERSTACK_USERNAME` / `BROWSERSTACK_ACCESS_KEY`
/// overrides when set, otherwise from `BrowserStackEnv`. They are substituted
/// into the URL byte for byte, without percent-encoding.
pub struct BrowserStackBackend;

impl TargetBackend for BrowserStackBackend {
    fn target_type(&self) -> TargetType {
        TargetType::BrowserStack
    }

    fn name(&self) -> &'static str {
        "browserstack"
    }

    fn display_name(&self) -> &'static str {
        "BrowserStack"
    }

    fn section(&self) -> &'static str {
        fields::BROWSERSTACK_ENV
    }

    fn hub_url(
        &self,
        config: &ConfigurationDocument,
        overrides: &dyn OverrideSource,
    ) -> Result<String, ConfigError> {
        let env = config.section(self.section())?;

        let username = match overrides.get(names::BROWSERSTACK_USERNAME) {
            Some(value) => value,
            None => env.string(fields::BROWSERSTACK_USERNAME)?,
        };
        let access_key = match overrides.get(names::BROWSERSTACK_ACCESS_KEY) {
            Some(value) => value,
            None => env.string(fields::BROWSERSTACK_ACCESS_KEY)?,
        };
        let server = env.string(fields::BROWSERSTACK_SERVER)?;

        Ok(format!("http://{username}:{access_key}@{server}/wd/hub"))
    }
}
