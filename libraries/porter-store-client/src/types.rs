//! Connection settings for the remote user store.

use std::time::Duration;

/// Default table holding user records
pub const DEFAULT_TABLE: &str = "users";

/// Default timeout for a whole request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default timeout for establishing a connection
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for connecting to the user store.
///
/// Built once at startup and handed to the client by value; the client never
/// reads settings from anywhere else.
#[derive(Clone)]
pub struct StoreConfig {
    /// Base URL of the store (e.g., "https://project.supabase.co")
    pub base_url: String,
    /// API key sent as both `apikey` and bearer token
    pub api_key: String,
    /// Table queried for user records
    pub table: String,
    /// Timeout for a whole request
    pub timeout: Duration,
    /// Timeout for establishing a connection
    pub connect_timeout: Duration,
}

impl StoreConfig {
    /// Create a config with default table and timeouts.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            table: DEFAULT_TABLE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Query a different table.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("table", &self.table)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}
