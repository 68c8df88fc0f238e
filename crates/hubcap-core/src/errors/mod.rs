use std::error::Error;

/// Base trait for all application errors
pub trait HubcapError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found at '{path}'")]
    ConfigNotFound { path: String },

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Missing required field '{field}' in configuration")]
    MissingField { field: String },

    #[error("Invalid field '{field}' in configuration: expected {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        ConfigError::MissingField {
            field: field.into(),
        }
    }
}

impl HubcapError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            ConfigError::ConfigReadError { .. } => "CONFIG_READ_ERROR",
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::MissingField { .. } => "MISSING_FIELD",
            ConfigError::InvalidField { .. } => "INVALID_FIELD",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, ConfigError::ConfigReadError { .. })
    }
}
