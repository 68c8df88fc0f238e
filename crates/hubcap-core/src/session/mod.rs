//! Session plan: everything a driver factory needs to open a session.

use serde::Serialize;
use tracing::info;

use crate::capabilities::{self, CapabilitySet};
use crate::config::ConfigurationDocument;
use crate::errors::ConfigError;
use crate::overrides::OverrideSource;
use crate::targets::{self, TargetType};

/// Resolved hub URL and capabilities for one automation session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionPlan {
    pub target: TargetType,
    pub hub_url: String,
    pub capabilities: CapabilitySet,
}

/// Run both resolvers against the same document and overrides.
///
/// Capabilities are resolved first; the two resolutions are independent.
pub fn resolve_plan(
    config: &ConfigurationDocument,
    overrides: &dyn OverrideSource,
) -> Result<SessionPlan, ConfigError> {
    let capabilities = capabilities::resolve(config, overrides)?;
    let resolved = targets::resolve_target(config, overrides)?;

    info!(
        event = "core.session.plan_completed",
        target = %resolved.target,
        capability_count = capabilities.len()
    );

    Ok(SessionPlan {
        target: resolved.target,
        hub_url: resolved.url,
        capabilities,
    })
}
