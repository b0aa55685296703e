//! File-based User Store Adapter
//!
//! Persists the single user record as one JSON document, `user.json` in the
//! configured data directory. The durable analogue of a browser's local
//! storage `"user"` slot.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::config::StorageConfig;
use crate::domain::user::UserAccount;
use crate::ports::{UserStore, UserStoreError};

const SLOT_FILE: &str = "user.json";

/// File-backed single-slot user store.
#[derive(Debug, Clone)]
pub struct FileUserStore {
    data_dir: PathBuf,
}

impl FileUserStore {
    /// Creates a store rooted at `data_dir`. The directory is created lazily
    /// on first save.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Creates a store from the storage configuration section.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.data_dir)
    }

    fn slot_path(&self) -> PathBuf {
        self.data_dir.join(SLOT_FILE)
    }
}

#[async_trait]
impl UserStore for FileUserStore {
    async fn load(&self) -> Result<Option<UserAccount>, UserStoreError> {
        let path = self.slot_path();
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)
            .await
            .map_err(|e| UserStoreError::Io(e.to_string()))?;

        let user = serde_json::from_str(&json)
            .map_err(|e| UserStoreError::CorruptRecord(e.to_string()))?;

        Ok(Some(user))
    }

    async fn save(&self, user: &UserAccount) -> Result<(), UserStoreError> {
        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| UserStoreError::Io(e.to_string()))?;

        let json = serde_json::to_string_pretty(user)
            .map_err(|e| UserStoreError::SerializationFailed(e.to_string()))?;

        fs::write(self.slot_path(), json)
            .await
            .map_err(|e| UserStoreError::Io(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self) -> Result<(), UserStoreError> {
        let path = self.slot_path();
        if path.exists() {
            fs::remove_file(&path)
                .await
                .map_err(|e| UserStoreError::Io(e.to_string()))?;
        }
        Ok(())
    }
}
