//! Authentication errors.
//!
//! Login is a local stand-in for a real auth provider, so the only failures
//! are input-shaped: they are recovered by re-prompting and are never fatal.

use thiserror::Error;

/// Invalid login input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The email field was empty or whitespace.
    #[error("Email cannot be empty")]
    EmptyEmail,

    /// The email does not look like an address (`local@domain`).
    #[error("Invalid email address: {0}")]
    MalformedEmail(String),

    /// The password field was empty.
    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl AuthError {
    /// True when the failure is about the email field.
    pub fn is_email_error(&self) -> bool {
        matches!(self, AuthError::EmptyEmail | AuthError::MalformedEmail(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_display_user_facing_messages() {
        assert_eq!(format!("{}", AuthError::EmptyEmail), "Email cannot be empty");
        assert_eq!(
            format!("{}", AuthError::MalformedEmail("foo".to_string())),
            "Invalid email address: foo"
        );
        assert_eq!(
            format!("{}", AuthError::EmptyPassword),
            "Password cannot be empty"
        );
    }

    #[test]
    fn email_errors_are_classified() {
        assert!(AuthError::EmptyEmail.is_email_error());
        assert!(AuthError::MalformedEmail("x".to_string()).is_email_error());
        assert!(!AuthError::EmptyPassword.is_email_error());
    }
}
