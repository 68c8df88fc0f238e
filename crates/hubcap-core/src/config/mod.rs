//! # Configuration System
//!
//! Static JSON configuration for a mobile automation session.
//!
//! The document is read from `configuration/capabilities.json` relative to
//! the working directory. It is never merged with other files: process-level
//! overrides are applied later by the resolvers, see [`crate::overrides`].
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use hubcap_core::config::ConfigurationDocument;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigurationDocument::load()?;
//!     let url = config.section("localEnv")?.string("url")?;
//!     println!("{url}");
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;

pub use defaults::CONFIG_FILE;
pub use types::{ConfigurationDocument, Section};

impl ConfigurationDocument {
    /// Load the configuration document from its fixed location.
    ///
    /// See [`loading::load`] for details.
    pub fn load() -> Result<Self, crate::errors::ConfigError> {
        loading::load()
    }

    /// Load a configuration document from an explicit path.
    ///
    /// See [`loading::load_from`] for details.
    pub fn load_from(path: &std::path::Path) -> Result<Self, crate::errors::ConfigError> {
        loading::load_from(path)
    }
}
