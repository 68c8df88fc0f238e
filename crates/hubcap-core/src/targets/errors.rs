//! Target-specific error types.

use crate::errors::HubcapError;

/// Errors that can occur while selecting a deployment target.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    #[error("Unknown target '{name}'. Supported: local, browserstack")]
    UnknownTarget { name: String },
}

impl HubcapError for TargetError {
    fn error_code(&self) -> &'static str {
        match self {
            TargetError::UnknownTarget { .. } => "UNKNOWN_TARGET",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
