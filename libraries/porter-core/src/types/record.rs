/// User record domain type
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One row of the remote `users` table.
///
/// Field names follow the store's snake_case columns. The stored password is
/// never serialized back out, so a record can be handed to a response body
/// without leaking it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Store-assigned identifier
    pub id: i64,

    /// Unique lookup key
    pub username: String,

    /// Contact address, empty when the column is null
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub email: String,

    /// Stored password value (plaintext or bcrypt hash)
    #[serde(skip_serializing)]
    pub password: String,

    /// Store-assigned creation timestamp
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<Utc>>,

    /// Whether the account is enabled
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl UserRecord {
    /// Create an active record with no creation timestamp
    pub fn new(
        id: i64,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            password: password.into(),
            created_at: None,
            is_active: true,
        }
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("created_at", &self.created_at)
            .field("is_active", &self.is_active)
            .finish()
    }
}

fn default_active() -> bool {
    true
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Accepts `timestamptz` values (RFC 3339 with offset) as well as plain
/// `timestamp` columns, which carry no offset and are read as UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }

    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| Some(naive.and_utc()))
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{}': {}", raw, e)))
}
