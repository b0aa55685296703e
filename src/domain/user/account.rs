//! UserAccount aggregate.
//!
//! The single record the session layer owns and persists. Identity fields are
//! fixed at registration; role, profile, and images evolve afterwards.
//!
//! # Invariants
//!
//! - `profile` is `Some` exactly when `role` is `Some`
//! - the profile's variant tag always matches `role`
//! - selecting a role replaces the profile with a fresh empty variant of the
//!   new tag (a deliberate reset, never a merge)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::UserId;

use super::{AuthError, InvalidProfileUpdate, Profile, ProfileFields, Role};

/// Fallback image URL when no avatar or cover has been chosen.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Which of the two account images an update addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageKind {
    Avatar,
    Cover,
}

/// The authenticated user's account record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    id: UserId,
    name: String,
    email: String,
    auth_token: String,
    #[serde(default)]
    role: Option<Role>,
    #[serde(default)]
    profile: Option<Profile>,
    avatar_url: String,
    cover_url: String,
}

impl UserAccount {
    /// Registers a new account from login input.
    ///
    /// The display name is the email's local part, the token is a freshly
    /// generated opaque value, and no role is selected yet.
    ///
    /// # Errors
    ///
    /// - `EmptyEmail` / `MalformedEmail` if the email is blank or not of the
    ///   form `local@domain`
    /// - `EmptyPassword` if the password is blank
    pub fn register(
        email: &str,
        password: &str,
        placeholder_url: &str,
    ) -> Result<Self, AuthError> {
        let email = Self::validate_email(email)?;
        if password.trim().is_empty() {
            return Err(AuthError::EmptyPassword);
        }

        let local_part = email
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            id: UserId::new(),
            name: local_part,
            email,
            auth_token: format!("mock-token-{}", Uuid::new_v4().simple()),
            role: None,
            profile: None,
            avatar_url: placeholder_url.to_string(),
            cover_url: placeholder_url.to_string(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    pub fn cover_url(&self) -> &str {
        &self.cover_url
    }

    /// Checks the role/profile pairing invariant. Stored records are run
    /// through this on hydration; a mismatch marks the record corrupt.
    pub fn role_matches_profile(&self) -> bool {
        match (&self.role, &self.profile) {
            (None, None) => true,
            (Some(role), Some(profile)) => profile.role() == *role,
            _ => false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Sets the role and replaces the profile with a fresh empty variant of
    /// the new tag. Re-selection discards all prior profile field values and
    /// resets both images to the placeholder.
    pub fn select_role(&mut self, role: Role, placeholder_url: &str) {
        self.role = Some(role);
        self.profile = Some(Profile::empty_for(role));
        self.avatar_url = placeholder_url.to_string();
        self.cover_url = placeholder_url.to_string();
    }

    /// Shallow-merges `fields` into the current profile.
    ///
    /// Returns `Ok(false)` (a no-op) when no role has been selected yet.
    ///
    /// # Errors
    ///
    /// - `InvalidProfileUpdate` if the merge would corrupt a known field;
    ///   the profile is left unchanged
    pub fn apply_profile_update(
        &mut self,
        fields: &ProfileFields,
    ) -> Result<bool, InvalidProfileUpdate> {
        let Some(profile) = &self.profile else {
            return Ok(false);
        };

        self.profile = Some(profile.merge(fields)?);
        Ok(true)
    }

    /// Points the avatar or cover image at a new URL.
    pub fn set_image(&mut self, kind: ImageKind, url: &str) {
        match kind {
            ImageKind::Avatar => self.avatar_url = url.to_string(),
            ImageKind::Cover => self.cover_url = url.to_string(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_email(email: &str) -> Result<String, AuthError> {
        let trimmed = email.trim();
        if trimmed.is_empty() {
            return Err(AuthError::EmptyEmail);
        }

        let mut parts = trimmed.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        if local.is_empty() || domain.is_empty() || domain.contains(char::is_whitespace) {
            return Err(AuthError::MalformedEmail(trimmed.to_string()));
        }

        Ok(trimmed.to_string())
    }
}
