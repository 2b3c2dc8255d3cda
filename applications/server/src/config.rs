/// Server configuration
use crate::error::{Result, ServerError};
use crate::services::MAX_SESSION_MINUTES;
use porter_auth::{AuthPolicy, PasswordScheme};
use porter_store_client::StoreConfig;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "porter.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_store")]
    pub store: StoreSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub base_url: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_table")]
    pub table: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub jwt_secret: String,

    #[serde(default = "default_session_minutes")]
    pub session_minutes: u64,

    #[serde(default)]
    pub password_scheme: PasswordScheme,

    #[serde(default)]
    pub require_active: bool,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit path must exist; otherwise `porter.toml` is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()).required(true));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables, e.g. PORTER_STORE__BASE_URL
        settings = settings.add_source(
            config::Environment::with_prefix("PORTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    ///
    /// Runs before any client is built, so a missing endpoint never turns
    /// into a malformed request.
    pub fn validate(&self) -> Result<()> {
        if self.store.base_url.trim().is_empty() {
            return Err(ServerError::Config(
                "Store URL is required (set PORTER_STORE__BASE_URL)".to_string(),
            ));
        }

        if self.store.api_key.trim().is_empty() {
            return Err(ServerError::Config(
                "Store API key is required (set PORTER_STORE__API_KEY)".to_string(),
            ));
        }

        if self.auth.jwt_secret.is_empty() {
            return Err(ServerError::Config(
                "JWT secret is required (set PORTER_AUTH__JWT_SECRET)".to_string(),
            ));
        }

        if self.auth.session_minutes == 0 {
            return Err(ServerError::Config(
                "Session lifetime must be at least one minute".to_string(),
            ));
        }

        if self.auth.session_minutes > MAX_SESSION_MINUTES {
            return Err(ServerError::Config(format!(
                "Session lifetime must be at most {} minutes",
                MAX_SESSION_MINUTES
            )));
        }

        if self.store.timeout_secs == 0 {
            return Err(ServerError::Config(
                "Store timeout must be at least one second".to_string(),
            ));
        }

        Ok(())
    }

    /// Settings for the store client
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.store.base_url.clone(), self.store.api_key.clone())
            .with_table(self.store.table.clone())
            .with_timeout(Duration::from_secs(self.store.timeout_secs))
            .with_connect_timeout(Duration::from_secs(self.store.connect_timeout_secs))
    }

    /// Rules for the authentication check
    pub fn auth_policy(&self) -> AuthPolicy {
        AuthPolicy {
            scheme: self.auth.password_scheme,
            require_active: self.auth.require_active,
        }
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> Result<SocketAddr> {
        let host: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|e| ServerError::Config(format!("Invalid host '{}': {}", self.server.host, e)))?;
        Ok(SocketAddr::from((host, self.server.port)))
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_store() -> StoreSettings {
    StoreSettings {
        base_url: String::new(),
        api_key: String::new(),
        table: default_table(),
        timeout_secs: default_timeout_secs(),
        connect_timeout_secs: default_connect_timeout_secs(),
    }
}

fn default_table() -> String {
    "users".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        jwt_secret: String::new(),
        session_minutes: default_session_minutes(),
        password_scheme: PasswordScheme::default(),
        require_active: false,
    }
}

fn default_session_minutes() -> u64 {
    60
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            store: default_store(),
            auth: default_auth(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ServerConfig {
        let mut config = ServerConfig::default();
        config.store.base_url = "https://project.supabase.co".to_string();
        config.store.api_key = "anon-key".to_string();
        config.auth.jwt_secret = "secret".to_string();
        config
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.table, "users");
        assert_eq!(config.auth.session_minutes, 60);
        assert_eq!(config.auth.password_scheme, PasswordScheme::Auto);
        assert!(!config.auth.require_active);
    }

    #[test]
    fn test_validate_requires_store_url() {
        let mut config = complete();
        config.store.base_url = String::new();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ServerError::Config(ref msg) if msg.contains("Store URL")));
    }

    #[test]
    fn test_validate_requires_api_key_and_secret() {
        let mut config = complete();
        config.store.api_key = " ".to_string();
        assert!(config.validate().is_err());

        let mut config = complete();
        config.auth.jwt_secret = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bounds_session_lifetime() {
        let mut config = complete();
        config.auth.session_minutes = MAX_SESSION_MINUTES;
        assert!(config.validate().is_ok());

        config.auth.session_minutes = MAX_SESSION_MINUTES + 1;
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));

        config.auth.session_minutes = u64::MAX;
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));
    }

    #[test]
    fn test_validate_complete() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn test_store_config_mapping() {
        let mut config = complete();
        config.store.timeout_secs = 3;
        let store = config.store_config();

        assert_eq!(store.base_url, "https://project.supabase.co");
        assert_eq!(store.table, "users");
        assert_eq!(store.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_bind_address() {
        let mut config = complete();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 3000;
        assert_eq!(config.bind_address().unwrap().to_string(), "127.0.0.1:3000");

        config.server.host = "not-an-ip".to_string();
        assert!(config.bind_address().is_err());
    }
}
