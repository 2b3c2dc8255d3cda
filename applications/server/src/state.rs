/// Shared application state
use crate::{
    config::ServerConfig,
    error::{Result, ServerError},
    services::SessionService,
};
use porter_auth::AuthenticationCheck;
use porter_store_client::CredentialStoreClient;
use std::sync::Arc;

/// Authentication check wired to the remote store
pub type StoreCheck = AuthenticationCheck<Arc<CredentialStoreClient>>;

/// Application state shared across all handlers
///
/// Everything here is built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CredentialStoreClient>,
    pub auth_check: Arc<StoreCheck>,
    pub sessions: Arc<SessionService>,
}

impl AppState {
    pub fn new(
        store: Arc<CredentialStoreClient>,
        auth_check: Arc<StoreCheck>,
        sessions: Arc<SessionService>,
    ) -> Self {
        Self {
            store,
            auth_check,
            sessions,
        }
    }

    /// Validate the configuration and build every service from it
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        config.validate()?;

        let store = CredentialStoreClient::new(config.store_config())
            .map_err(|e| ServerError::Config(e.to_string()))?;
        let store = Arc::new(store);

        let auth_check = AuthenticationCheck::with_policy(Arc::clone(&store), config.auth_policy());

        let sessions = SessionService::new(
            config.auth.jwt_secret.clone(),
            config.auth.session_minutes,
        );

        Ok(Self::new(store, Arc::new(auth_check), Arc::new(sessions)))
    }
}
