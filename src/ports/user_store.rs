//! User Store Port - the single durable slot backing session persistence.
//!
//! One serialized `UserAccount` record, or nothing. The session layer writes
//! through on every mutation and reads exactly once, at hydration. The store
//! never holds a live reference to the session's user, only the last
//! serialized snapshot.

use async_trait::async_trait;

use crate::domain::user::UserAccount;

/// Errors that can occur while reading or writing the user slot.
#[derive(Debug, thiserror::Error)]
pub enum UserStoreError {
    /// The slot holds bytes that do not parse as a user record. Hydration
    /// treats this as "no session" and discards the record.
    #[error("Stored user record is corrupt: {0}")]
    CorruptRecord(String),

    #[error("Failed to serialize user record: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Port for the durable single-record user slot.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Loads the persisted user record.
    ///
    /// # Returns
    /// `Ok(None)` when the slot is empty.
    ///
    /// # Errors
    /// `CorruptRecord` when the slot holds an unparseable value; `Io` on
    /// read failure.
    async fn load(&self) -> Result<Option<UserAccount>, UserStoreError>;

    /// Overwrites the slot with a serialized snapshot of `user`.
    async fn save(&self, user: &UserAccount) -> Result<(), UserStoreError>;

    /// Empties the slot. Must succeed (as a no-op) when already empty.
    async fn delete(&self) -> Result<(), UserStoreError>;
}
