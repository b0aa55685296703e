//! Storage configuration.

use serde::Deserialize;

use super::ValidationError;

fn default_data_dir() -> String {
    "./data".to_string()
}

/// Where the durable user slot lives.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the `user.json` slot file.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.trim().is_empty() {
            return Err(ValidationError::invalid_field(
                "storage.data_dir",
                "cannot be empty",
            ));
        }
        Ok(())
    }
}
