/// Authentication outcome
use crate::error::LookupError;
use crate::types::UserRecord;

/// Result of one authentication check.
///
/// `InvalidCredentials` covers both an unknown username and a wrong password
/// so callers cannot tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Credential matched; carries the record that was found
    Authenticated(UserRecord),

    /// Unknown user or wrong password
    InvalidCredentials,

    /// The remote lookup could not be completed
    LookupFailed(LookupError),
}

impl AuthOutcome {
    /// Whether the credential was accepted
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The authenticated record, if any
    pub fn record(&self) -> Option<&UserRecord> {
        match self {
            Self::Authenticated(record) => Some(record),
            _ => None,
        }
    }

    /// Consume the outcome, returning the authenticated record if any
    pub fn into_record(self) -> Option<UserRecord> {
        match self {
            Self::Authenticated(record) => Some(record),
            _ => None,
        }
    }

    /// Short tag for log fields
    pub fn label(&self) -> &'static str {
        match self {
            Self::Authenticated(_) => "authenticated",
            Self::InvalidCredentials => "invalid_credentials",
            Self::LookupFailed(_) => "lookup_failed",
        }
    }
}

impl From<LookupError> for AuthOutcome {
    fn from(err: LookupError) -> Self {
        Self::LookupFailed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accessors() {
        let record = UserRecord::new(1, "alice", "alice@example.com", "secret123");
        let outcome = AuthOutcome::Authenticated(record.clone());

        assert!(outcome.is_authenticated());
        assert_eq!(outcome.record(), Some(&record));
        assert_eq!(outcome.label(), "authenticated");
        assert_eq!(outcome.into_record(), Some(record));
    }

    #[test]
    fn test_rejections_carry_no_record() {
        assert!(AuthOutcome::InvalidCredentials.record().is_none());

        let failed: AuthOutcome = LookupError::Timeout.into();
        assert!(!failed.is_authenticated());
        assert_eq!(failed.label(), "lookup_failed");
        assert_eq!(failed, AuthOutcome::LookupFailed(LookupError::Timeout));
    }
}
