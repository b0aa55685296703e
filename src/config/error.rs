//! Configuration error types.

use thiserror::Error;

/// Failure to load configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadFailed(#[from] config::ConfigError),
}

/// A loaded configuration value failed semantic validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Configuration field '{field}' is invalid: {reason}")]
    InvalidField { field: String, reason: String },
}

impl ValidationError {
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_the_field() {
        let err = ValidationError::invalid_field("storage.data_dir", "cannot be empty");
        assert_eq!(
            format!("{}", err),
            "Configuration field 'storage.data_dir' is invalid: cannot be empty"
        );
    }
}
