//! In-memory User Store Adapter
//!
//! Keeps the serialized record in a process-local slot. Used by tests and by
//! callers that want session semantics without durability. Supports failure
//! injection and raw-record access so corrupt-record and storage-failure
//! paths can be exercised.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::user::UserAccount;
use crate::ports::{UserStore, UserStoreError};

/// In-memory single-slot user store.
///
/// The slot holds the *serialized* record, not a live value, so it exercises
/// the same round-trip path as the durable adapter.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    // RwLock because the port takes `&self`; there is no concurrent caller.
    slot: RwLock<Option<String>>,
    fail_writes: RwLock<bool>,
}

impl InMemoryUserStore {
    /// Creates a store with an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `save`/`delete` fail, simulating quota or IO
    /// trouble.
    pub fn fail_writes(&self) {
        *self.fail_writes.write().unwrap() = true;
    }

    /// Restores normal write behavior.
    pub fn restore_writes(&self) {
        *self.fail_writes.write().unwrap() = false;
    }

    /// Replaces the slot with a raw string, bypassing serialization. For
    /// planting corrupt records in tests.
    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.slot.write().unwrap() = Some(raw.into());
    }

    /// Returns the raw slot contents.
    pub fn raw(&self) -> Option<String> {
        self.slot.read().unwrap().clone()
    }

    fn writes_failing(&self) -> bool {
        *self.fail_writes.read().unwrap()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn load(&self) -> Result<Option<UserAccount>, UserStoreError> {
        let slot = self.slot.read().unwrap().clone();
        match slot {
            None => Ok(None),
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| UserStoreError::CorruptRecord(e.to_string())),
        }
    }

    async fn save(&self, user: &UserAccount) -> Result<(), UserStoreError> {
        if self.writes_failing() {
            return Err(UserStoreError::Io("simulated write failure".to_string()));
        }

        let json = serde_json::to_string(user)
            .map_err(|e| UserStoreError::SerializationFailed(e.to_string()))?;
        *self.slot.write().unwrap() = Some(json);
        Ok(())
    }

    async fn delete(&self) -> Result<(), UserStoreError> {
        if self.writes_failing() {
            return Err(UserStoreError::Io("simulated write failure".to_string()));
        }

        *self.slot.write().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::DEFAULT_PLACEHOLDER_IMAGE;

    fn test_user() -> UserAccount {
        UserAccount::register("alice@example.com", "secret", DEFAULT_PLACEHOLDER_IMAGE).unwrap()
    }

    #[tokio::test]
    async fn save_and_load_roundtrips_the_record() {
        let store = InMemoryUserStore::new();
        let user = test_user();

        store.save(&user).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn load_returns_none_for_empty_slot() {
        let store = InMemoryUserStore::new();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_empties_the_slot_and_is_idempotent() {
        let store = InMemoryUserStore::new();
        store.save(&test_user()).await.unwrap();

        store.delete().await.unwrap();
        store.delete().await.unwrap();
        assert!(store.raw().is_none());
    }

    #[tokio::test]
    async fn planted_corrupt_record_surfaces_as_corrupt_error() {
        let store = InMemoryUserStore::new();
        store.set_raw("][ definitely not json");

        let result = store.load().await;
        assert!(matches!(result, Err(UserStoreError::CorruptRecord(_))));
    }

    #[tokio::test]
    async fn failing_writes_leave_the_slot_untouched() {
        let store = InMemoryUserStore::new();
        store.save(&test_user()).await.unwrap();
        let before = store.raw();

        store.fail_writes();
        assert!(store.save(&test_user()).await.is_err());
        assert!(store.delete().await.is_err());
        assert_eq!(store.raw(), before);

        store.restore_writes();
        assert!(store.delete().await.is_ok());
    }
}
