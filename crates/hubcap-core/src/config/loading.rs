//! Configuration file loading.
//!
//! The configuration lives at a fixed location relative to the working
//! directory (see [`CONFIG_FILE`]). Every failure is logged at error level
//! before it is returned to the caller.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tracing::{error, info};

use crate::config::defaults::CONFIG_FILE;
use crate::config::types::ConfigurationDocument;
use crate::errors::ConfigError;

/// Load the configuration document from [`CONFIG_FILE`].
///
/// # Errors
///
/// Returns [`ConfigError::ConfigNotFound`] if the file does not exist,
/// [`ConfigError::ConfigReadError`] if it cannot be read and
/// [`ConfigError::ConfigParseError`] if it is not a JSON object.
pub fn load() -> Result<ConfigurationDocument, ConfigError> {
    load_from(Path::new(CONFIG_FILE))
}

/// Load a configuration document from the given path.
///
/// Never writes to the file; calling it twice on unchanged content yields
/// equal documents.
pub fn load_from(path: &Path) -> Result<ConfigurationDocument, ConfigError> {
    info!(
        event = "core.config.load_started",
        path = %path.display()
    );

    match read_document(path) {
        Ok(config) => {
            info!(
                event = "core.config.load_completed",
                path = %path.display()
            );
            Ok(config)
        }
        Err(e) => {
            error!(
                event = "core.config.load_failed",
                path = %path.display(),
                error = %e
            );
            Err(e)
        }
    }
}

fn read_document(path: &Path) -> Result<ConfigurationDocument, ConfigError> {
    let display = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::ConfigNotFound {
            path: display.clone(),
        },
        _ => ConfigError::ConfigReadError {
            path: display.clone(),
            source: e,
        },
    })?;

    let value: Value =
        serde_json::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            path: display.clone(),
            message: e.to_string(),
        })?;

    ConfigurationDocument::from_value(value).ok_or_else(|| ConfigError::ConfigParseError {
        path: display,
        message: "top-level value must be a JSON object".to_string(),
    })
}
