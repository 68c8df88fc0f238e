//! Deployment target module.
//!
//! Selects where the automation session runs and builds the hub URL for it.
//!
//! # Architecture
//!
//! - [`TargetBackend`] - Trait defining the interface for target implementations
//! - [`TargetType`] - Enum of all supported targets
//! - [`TargetError`] - Target-specific error types
//! - [`backends`] - Individual target backend implementations
//! - [`registry`] - Global registry for target lookup
//! - [`handler`] - Selector handling and fallback
//!
//! # Usage
//!
//! ```rust
//! use hubcap_core::targets::{default_target_name, get_target};
//!
//! assert_eq!(get_target("BrowserStack").unwrap().name(), "browserstack");
//! assert!(get_target("unknown").is_none());
//! assert_eq!(default_target_name(), "local");
//! ```

pub mod backends;
pub mod errors;
pub mod handler;
pub mod registry;
pub mod traits;
pub mod types;

// Re-export public API
pub use errors::TargetError;
pub use handler::{ResolvedTarget, resolve, resolve_target};
pub use registry::{
    default_target_backend, default_target_name, get_target, get_target_by_type,
};
pub use traits::TargetBackend;
pub use types::TargetType;
