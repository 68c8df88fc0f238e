//! hubcap-core: resolve the capabilities and hub URL for a mobile automation session
//!
//! The static configuration document is loaded once, then handed together
//! with an override source to two independent resolvers.
//!
//! # Main Entry Points
//!
//! - [`config`] - Load the configuration document
//! - [`overrides`] - Environment and explicit override sources
//! - [`capabilities`] - Resolve the capability set
//! - [`targets`] - Select the deployment target and build the hub URL
//! - [`session`] - Bundle both results into a session plan

pub mod capabilities;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod overrides;
pub mod session;
pub mod targets;

#[cfg(test)]
mod test_support;

// Re-export commonly used types at crate root for convenience
pub use capabilities::CapabilitySet;
pub use config::ConfigurationDocument;
pub use errors::{ConfigError, HubcapError};
pub use overrides::{EnvOverrides, OverrideMap, OverrideSource};
pub use session::{SessionPlan, resolve_plan};
pub use targets::{ResolvedTarget, TargetType};

// Re-export resolver entry points
pub use capabilities::resolve as resolve_capabilities;
pub use targets::resolve as resolve_hub_url;

// Re-export logging initialization
pub use logging::init_logging;
