/// Submitted credential pair
use crate::error::{LookupError, Result};
use serde::Deserialize;
use std::fmt;

/// Maximum username length accepted from callers
pub const MAX_USERNAME_LEN: usize = 50;

/// Shortest password accepted from callers
pub const MIN_PASSWORD_LEN: usize = 4;

/// Longest password accepted from callers
pub const MAX_PASSWORD_LEN: usize = 100;

/// Username/password pair submitted by a caller. Never persisted.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credential {
    /// Submitted username
    pub username: String,
    /// Submitted password
    pub password: String,
}

impl Credential {
    /// Create a new credential pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check the form rules for a login submission
    pub fn validate(&self) -> Result<()> {
        validate_username(&self.username)?;

        if self.password.is_empty() {
            return Err(LookupError::invalid_input("Password is required"));
        }

        let len = self.password.chars().count();
        if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len) {
            return Err(LookupError::invalid_input(format!(
                "Password must be between {} and {} characters",
                MIN_PASSWORD_LEN, MAX_PASSWORD_LEN
            )));
        }

        Ok(())
    }
}

/// Check the form rules for a username on its own
pub fn validate_username(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(LookupError::invalid_input("Username is required"));
    }

    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(LookupError::invalid_input(format!(
            "Username cannot be longer than {} characters",
            MAX_USERNAME_LEN
        )));
    }

    Ok(())
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credential() {
        assert!(Credential::new("alice", "secret123").validate().is_ok());
        assert!(Credential::new("a", "abcd").validate().is_ok());
    }

    #[test]
    fn test_username_required() {
        let err = Credential::new("   ", "secret123").validate().unwrap_err();
        assert_eq!(err, LookupError::invalid_input("Username is required"));
    }

    #[test]
    fn test_username_length_limit() {
        let exact = "u".repeat(MAX_USERNAME_LEN);
        assert!(Credential::new(exact, "secret123").validate().is_ok());

        let long = "u".repeat(MAX_USERNAME_LEN + 1);
        assert!(Credential::new(long, "secret123").validate().is_err());
    }

    #[test]
    fn test_password_rules() {
        assert_eq!(
            Credential::new("alice", "").validate().unwrap_err(),
            LookupError::invalid_input("Password is required")
        );
        assert!(Credential::new("alice", "abc").validate().is_err());
        assert!(Credential::new("alice", "p".repeat(101)).validate().is_err());
        assert!(Credential::new("alice", "p".repeat(100)).validate().is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 4 characters, 8 bytes
        assert!(Credential::new("josé", "ññññ").validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", Credential::new("alice", "secret123"));
        assert!(!debug.contains("secret123"));
    }
}
