//! Password verification.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// How the stored password value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordScheme {
    /// Stored value is the password itself
    Plaintext,
    /// Stored value is a bcrypt hash
    Bcrypt,
    /// bcrypt when the stored value parses as a bcrypt hash, plaintext otherwise
    #[default]
    Auto,
}

impl PasswordScheme {
    /// Verify a submitted password against a stored value.
    pub fn verify(self, submitted: &str, stored: &str) -> bool {
        match self {
            Self::Plaintext => constant_time_eq(submitted.as_bytes(), stored.as_bytes()),
            Self::Bcrypt => verify_bcrypt(submitted, stored),
            Self::Auto if is_bcrypt_hash(stored) => match bcrypt::verify(submitted, stored) {
                Ok(valid) => valid,
                // A plaintext password may itself start with a bcrypt prefix
                Err(_) => constant_time_eq(submitted.as_bytes(), stored.as_bytes()),
            },
            Self::Auto => constant_time_eq(submitted.as_bytes(), stored.as_bytes()),
        }
    }
}

/// Hash a password with bcrypt at the default cost
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
}

/// Whether a stored value carries a bcrypt prefix
pub fn is_bcrypt_hash(stored: &str) -> bool {
    ["$2a$", "$2b$", "$2x$", "$2y$"]
        .iter()
        .any(|prefix| stored.starts_with(prefix))
}

fn verify_bcrypt(submitted: &str, stored: &str) -> bool {
    match bcrypt::verify(submitted, stored) {
        Ok(valid) => valid,
        Err(e) => {
            warn!(error = %e, "Stored password is not a usable bcrypt hash");
            false
        }
    }
}

/// Byte comparison whose running time depends only on the lengths.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"secret123", b"secret123"));
        assert!(!constant_time_eq(b"secret123", b"secret124"));
        assert!(!constant_time_eq(b"secret", b"secret123"));
        assert!(constant_time_eq(b"", b""));
    }

    #[test]
    fn test_plaintext_is_exact() {
        let scheme = PasswordScheme::Plaintext;
        assert!(scheme.verify("secret123", "secret123"));
        assert!(!scheme.verify("Secret123", "secret123"));
        assert!(!scheme.verify("secret123 ", "secret123"));
    }

    #[test]
    fn test_bcrypt_detection() {
        assert!(is_bcrypt_hash("$2b$12$abcdefghijklmnopqrstuv"));
        assert!(is_bcrypt_hash("$2y$10$abcdefghijklmnopqrstuv"));
        assert!(!is_bcrypt_hash("secret123"));
        assert!(!is_bcrypt_hash("$argon2id$v=19$m=65536"));
    }

    #[test]
    fn test_bcrypt_round_trip() {
        let hash = hash_password("my_secure_password").unwrap();
        assert!(PasswordScheme::Bcrypt.verify("my_secure_password", &hash));
        assert!(!PasswordScheme::Bcrypt.verify("wrong_password", &hash));
    }

    #[test]
    fn test_bcrypt_rejects_plaintext_store() {
        // A plaintext value is not a hash; Bcrypt must not fall back to equality
        assert!(!PasswordScheme::Bcrypt.verify("secret123", "secret123"));
    }

    #[test]
    fn test_auto_handles_both() {
        let hash = hash_password("hunter22").unwrap();
        assert!(PasswordScheme::Auto.verify("hunter22", &hash));
        assert!(!PasswordScheme::Auto.verify(&hash, &hash));
        assert!(PasswordScheme::Auto.verify("secret123", "secret123"));
        assert!(!PasswordScheme::Auto.verify("wrong", "secret123"));
    }

    #[test]
    fn test_auto_plaintext_with_bcrypt_prefix() {
        assert!(PasswordScheme::Auto.verify("$2b$pass", "$2b$pass"));
        assert!(PasswordScheme::Auto.verify("$2y$10$short", "$2y$10$short"));
        assert!(!PasswordScheme::Auto.verify("$2b$other", "$2b$pass"));
        assert!(!PasswordScheme::Bcrypt.verify("$2b$pass", "$2b$pass"));
    }

    #[test]
    fn test_scheme_deserializes_lowercase() {
        let scheme: PasswordScheme = serde_json::from_str("\"bcrypt\"").unwrap();
        assert_eq!(scheme, PasswordScheme::Bcrypt);
        assert_eq!(PasswordScheme::default(), PasswordScheme::Auto);
    }
}
