/// Error taxonomy for user store lookups
use thiserror::Error;

/// Result type alias using `LookupError`
pub type Result<T> = std::result::Result<T, LookupError>;

/// Errors raised while looking up a user in the remote store.
///
/// None of the variants carry the remote response body; that is logged
/// where the error is produced and never handed to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Store endpoint or API key missing or unusable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input rejected before any request was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Outbound call exceeded the configured timeout
    #[error("Request to user store timed out")]
    Timeout,

    /// Connection or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Store answered with a non-success status
    #[error("User store returned status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Response body was not a list of user records
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// More than one record matched a username that should be unique
    #[error("{count} records match username '{username}'")]
    AmbiguousMatch {
        /// Username that was looked up
        username: String,
        /// Number of matching records
        count: usize,
    },
}

impl LookupError {
    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a malformed response error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Whether the check could not run because of missing settings
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Whether the same call could plausibly succeed later
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout | Self::Network(_) => true,
            Self::Status { status } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(LookupError::Timeout.is_transient());
        assert!(LookupError::network("connection refused").is_transient());
        assert!(LookupError::Status { status: 503 }.is_transient());

        assert!(!LookupError::Status { status: 404 }.is_transient());
        assert!(!LookupError::configuration("missing url").is_transient());
        assert!(!LookupError::malformed("not json").is_transient());
    }

    #[test]
    fn test_display_does_not_include_body() {
        let err = LookupError::Status { status: 500 };
        assert_eq!(err.to_string(), "User store returned status 500");
    }

    #[test]
    fn test_ambiguous_match_message() {
        let err = LookupError::AmbiguousMatch {
            username: "alice".to_string(),
            count: 2,
        };
        assert_eq!(err.to_string(), "2 records match username 'alice'");
    }
}
