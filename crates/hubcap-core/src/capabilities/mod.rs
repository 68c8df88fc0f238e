//! Capability resolution.
//!
//! Builds the capability set handed to the driver factory. Overrides only
//! choose which *key* a value is stored under: the values themselves always
//! come from the configuration document. This lets a caller remap to
//! vendor-prefixed names (`appium:deviceName`) without editing the file.

pub mod types;

pub use types::CapabilitySet;

use serde_json::Value;
use tracing::{debug, info};

use crate::config::ConfigurationDocument;
use crate::config::defaults::{capability_keys, fields, overrides as names};
use crate::errors::ConfigError;
use crate::overrides::OverrideSource;

/// Resolve the capability set for the device and app under test.
///
/// The install capability (default key `app`) is only present when the
/// `TO_INSTALL` override is set to a non-empty value.
///
/// # Errors
///
/// Returns [`ConfigError::MissingField`] if a required document field is absent.
pub fn resolve(
    config: &ConfigurationDocument,
    overrides: &dyn OverrideSource,
) -> Result<CapabilitySet, ConfigError> {
    let mut caps = CapabilitySet::new();

    caps.set(
        remapped_key(overrides, names::PLATFORM_NAME, capability_keys::PLATFORM_NAME),
        document_value(config, fields::PLATFORM_NAME)?,
    );
    caps.set(
        remapped_key(
            overrides,
            names::PLATFORM_VERSION,
            capability_keys::PLATFORM_VERSION,
        ),
        document_value(config, fields::PLATFORM_VERSION)?,
    );
    caps.set(
        remapped_key(overrides, names::DEVICE_NAME, capability_keys::DEVICE_NAME),
        document_value(config, fields::DEVICE_NAME)?,
    );

    if let Some(flag) = overrides.get_non_empty(names::TO_INSTALL) {
        let key = remapped_key(overrides, names::APP_LOCATION, capability_keys::APP);
        info!(
            event = "core.capabilities.install_requested",
            capability = key,
            flag = flag,
            "Install capability set, the application will be freshly installed"
        );
        caps.set(key, document_value(config, fields::APP_LOCATION)?);
    }

    caps.set(
        capability_keys::APP_ACTIVITY,
        document_value(config, fields::APP_ACTIVITY)?,
    );
    caps.set(
        capability_keys::APP_PACKAGE,
        document_value(config, fields::APP_PACKAGE)?,
    );

    debug!(
        event = "core.capabilities.resolve_completed",
        count = caps.len()
    );

    Ok(caps)
}

/// The override value when one is set (even empty), otherwise the default key.
fn remapped_key<'a>(
    overrides: &'a dyn OverrideSource,
    override_name: &str,
    default_key: &'a str,
) -> &'a str {
    overrides.get(override_name).unwrap_or(default_key)
}

fn document_value(config: &ConfigurationDocument, field: &str) -> Result<Value, ConfigError> {
    config.field(field).cloned()
}
