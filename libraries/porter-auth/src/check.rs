//! Authentication decision over one directory lookup.

use crate::password::PasswordScheme;
use porter_core::{AuthOutcome, Credential, UserDirectory};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Rules applied once a record has been found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthPolicy {
    /// How stored passwords are compared
    #[serde(default)]
    pub scheme: PasswordScheme,

    /// Reject records whose `is_active` flag is false
    #[serde(default)]
    pub require_active: bool,
}

/// Decides whether a submitted username/password pair is valid.
///
/// Holds no per-call state: every call performs one fresh lookup and the
/// same inputs against an unchanged store always produce the same outcome.
#[derive(Debug, Clone)]
pub struct AuthenticationCheck<D> {
    directory: D,
    policy: AuthPolicy,
}

impl<D: UserDirectory> AuthenticationCheck<D> {
    /// Create a check with the default policy
    pub fn new(directory: D) -> Self {
        Self::with_policy(directory, AuthPolicy::default())
    }

    /// Create a check with an explicit policy
    pub fn with_policy(directory: D, policy: AuthPolicy) -> Self {
        Self { directory, policy }
    }

    /// The directory lookups are made against
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// The policy in effect
    pub fn policy(&self) -> AuthPolicy {
        self.policy
    }

    /// Check a username/password pair.
    ///
    /// Lookup faults come back as [`AuthOutcome::LookupFailed`]; an unknown
    /// user and a wrong password both come back as
    /// [`AuthOutcome::InvalidCredentials`].
    pub async fn authenticate(&self, username: &str, password: &str) -> AuthOutcome {
        let record = match self.directory.find_by_username(username).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!(username = %username, "Authentication rejected: user not found");
                return AuthOutcome::InvalidCredentials;
            }
            Err(e) => {
                warn!(username = %username, error = %e, "Authentication aborted: lookup failed");
                return AuthOutcome::LookupFailed(e);
            }
        };

        if !self.policy.scheme.verify(password, &record.password) {
            debug!(username = %username, "Authentication rejected: password mismatch");
            return AuthOutcome::InvalidCredentials;
        }

        if self.policy.require_active && !record.is_active {
            warn!(username = %username, user_id = record.id, "Authentication rejected: account inactive");
            return AuthOutcome::InvalidCredentials;
        }

        info!(username = %username, user_id = record.id, "Authentication succeeded");
        AuthOutcome::Authenticated(record)
    }

    /// Check a submitted credential pair
    pub async fn authenticate_credential(&self, credential: &Credential) -> AuthOutcome {
        self.authenticate(&credential.username, &credential.password)
            .await
    }
}
