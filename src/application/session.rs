//! SessionManager - owns the authenticated identity.
//!
//! Constructed once at application start and passed by reference to whatever
//! needs it; torn down only at process exit. There is no global/ambient
//! session context.
//!
//! Every mutation writes through to the [`UserStore`]. Persistence is
//! fire-and-forget: a failed write is logged and swallowed, and the
//! in-memory state stays authoritative for the session's lifetime. Login is
//! the one operation with a real suspend point (where a network round trip
//! would be awaited); the `loading` flag brackets it. Overlapping logins are
//! last-writer-wins; cancellation is not supported.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::AssetsConfig;
use crate::domain::user::{AuthError, ImageKind, ProfileFields, Role, UserAccount};
use crate::ports::{UserStore, UserStoreError};

/// The session state machine over `Option<UserAccount>`.
pub struct SessionManager {
    store: Arc<dyn UserStore>,
    placeholder_url: String,
    user: Option<UserAccount>,
    loading: bool,
}

impl SessionManager {
    /// Constructs the manager and hydrates the session from the store.
    ///
    /// A corrupt or invariant-violating stored record is discarded (deleted)
    /// and treated as "no session"; a store read failure is logged and also
    /// treated as "no session". Hydration never fails.
    pub async fn hydrate(store: Arc<dyn UserStore>) -> Self {
        Self::hydrate_with_assets(store, AssetsConfig::default()).await
    }

    /// Like [`hydrate`](Self::hydrate), with a configured placeholder image.
    pub async fn hydrate_with_assets(store: Arc<dyn UserStore>, assets: AssetsConfig) -> Self {
        let user = match store.load().await {
            Ok(Some(user)) if user.role_matches_profile() => {
                debug!(user_id = %user.id(), "session hydrated from store");
                Some(user)
            }
            Ok(Some(user)) => {
                warn!(user_id = %user.id(), "stored session violates role/profile pairing; discarding");
                Self::discard_record(store.as_ref()).await;
                None
            }
            Ok(None) => None,
            Err(UserStoreError::CorruptRecord(reason)) => {
                warn!(%reason, "stored session is corrupt; discarding");
                Self::discard_record(store.as_ref()).await;
                None
            }
            Err(err) => {
                warn!(error = %err, "failed to read persisted session; starting logged out");
                None
            }
        };

        Self {
            store,
            placeholder_url: assets.placeholder_image,
            user,
            loading: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries (the presentation contract)
    // ─────────────────────────────────────────────────────────────────────────

    pub fn user(&self) -> Option<&UserAccount> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// True only while a login transition is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────────

    /// Logs in with the mock credential check and persists the new session.
    ///
    /// # Errors
    ///
    /// `AuthError` for empty or malformed input; the current session (if any)
    /// is left untouched on failure.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&UserAccount, AuthError> {
        self.loading = true;

        let user = match UserAccount::register(email, password, &self.placeholder_url) {
            Ok(user) => user,
            Err(err) => {
                self.loading = false;
                return Err(err);
            }
        };

        info!(user_id = %user.id(), "login succeeded");
        self.user = Some(user);
        self.persist().await;
        self.loading = false;

        Ok(self.user.as_ref().expect("user was just set"))
    }

    /// Ends the session and deletes the persisted snapshot. Calling this
    /// while logged out is a no-op, not an error.
    pub async fn logout(&mut self) {
        if self.user.take().is_none() {
            return;
        }

        info!("logged out");
        if let Err(err) = self.store.delete().await {
            warn!(error = %err, "failed to delete persisted session");
        }
    }

    /// Sets the role and replaces the profile with a fresh empty variant of
    /// the new tag (re-selection discards prior field values). No-op when no
    /// session is active.
    pub async fn select_role(&mut self, role: Role) {
        let Some(user) = self.user.as_mut() else {
            return;
        };

        user.select_role(role, &self.placeholder_url);
        info!(%role, "role selected");
        self.persist().await;
    }

    /// Shallow-merges partial fields into the current profile. Silent no-op
    /// when no session or no role is active; a merge that would corrupt a
    /// known field is logged and ignored, leaving the profile unchanged.
    pub async fn update_profile(&mut self, fields: &ProfileFields) {
        let Some(user) = self.user.as_mut() else {
            return;
        };

        match user.apply_profile_update(fields) {
            Ok(true) => {
                debug!("profile updated");
                self.persist().await;
            }
            Ok(false) => {}
            Err(err) => {
                warn!(error = %err, "profile update ignored");
            }
        }
    }

    /// Points the avatar or cover at a new URL. No-op when no session.
    pub async fn update_image(&mut self, kind: ImageKind, url: &str) {
        let Some(user) = self.user.as_mut() else {
            return;
        };

        user.set_image(kind, url);
        self.persist().await;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Write-through snapshot. Failures are logged, never surfaced: the
    /// in-memory mutation already succeeded and stays authoritative.
    async fn persist(&self) {
        let Some(user) = &self.user else {
            return;
        };

        match self.store.save(user).await {
            Ok(()) => debug!("session persisted"),
            Err(err) => {
                warn!(error = %err, "failed to persist session; in-memory state remains authoritative");
            }
        }
    }

    async fn discard_record(store: &dyn UserStore) {
        if let Err(err) = store.delete().await {
            warn!(error = %err, "failed to discard bad session record");
        }
    }
}
