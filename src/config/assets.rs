//! Asset configuration.

use serde::Deserialize;

use super::ValidationError;
use crate::domain::user::DEFAULT_PLACEHOLDER_IMAGE;

fn default_placeholder_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}

/// Presentation asset defaults the core hands out.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// URL used for avatar and cover images until the user picks their own.
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            placeholder_image: default_placeholder_image(),
        }
    }
}

impl AssetsConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.placeholder_image.trim().is_empty() {
            return Err(ValidationError::invalid_field(
                "assets.placeholder_image",
                "cannot be empty",
            ));
        }
        Ok(())
    }
}
