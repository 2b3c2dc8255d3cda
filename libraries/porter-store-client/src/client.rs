//! Client for the remote user store.

use crate::types::StoreConfig;
use async_trait::async_trait;
use porter_core::{LookupError, Result, UserDirectory, UserRecord};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};
use url::Url;

/// Longest slice of a remote error body that is written to the log
const MAX_LOGGED_BODY: usize = 256;

/// Client that reads user records from the remote store.
///
/// Every lookup is a single GET with no retry. The API key is attached to
/// every request as default headers, so it is set once here and nowhere else.
///
/// # Example
///
/// ```ignore
/// use porter_store_client::{CredentialStoreClient, StoreConfig};
///
/// let client = CredentialStoreClient::new(StoreConfig::new("https://project.supabase.co", "key"))?;
/// let exists = client.user_exists("alice").await?;
/// ```
#[derive(Debug, Clone)]
pub struct CredentialStoreClient {
    http: Client,
    base_url: String,
    table: String,
}

impl CredentialStoreClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails with [`LookupError::Configuration`] when the URL or API key is
    /// missing or unusable, so a misconfigured client can never issue a request.
    pub fn new(config: StoreConfig) -> Result<Self> {
        // Validate URL
        let url = config.base_url.trim();
        if url.is_empty() {
            return Err(LookupError::configuration("Store URL cannot be empty"));
        }

        // Parse and normalize URL
        let url = url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(LookupError::configuration(
                "Store URL must start with http:// or https://",
            ));
        }
        let parsed = Url::parse(&url)
            .map_err(|e| LookupError::configuration(format!("Invalid store URL: {}", e)))?;
        if parsed.host_str().is_none() {
            return Err(LookupError::configuration("Store URL has no host"));
        }

        if config.api_key.trim().is_empty() {
            return Err(LookupError::configuration("API key cannot be empty"));
        }

        let table = config.table.trim().to_string();
        if table.is_empty() {
            return Err(LookupError::configuration("Table name cannot be empty"));
        }

        let headers = auth_headers(&config.api_key)?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("porter/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| LookupError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        debug!(url = %url, table = %table, "User store client configured");

        Ok(Self {
            http,
            base_url: url,
            table,
        })
    }

    /// Get the normalized store URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the table queried for records.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Find the record whose username equals `username`.
    ///
    /// Returns `None` when nothing matches. More than one match is treated as
    /// a data-integrity fault rather than silently picking one.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        let mut records: Vec<UserRecord> = self.query_username(username, None).await?;

        match records.len() {
            0 => {
                debug!(username = %username, "No user record matched");
                Ok(None)
            }
            1 => Ok(records.pop()),
            count => {
                error!(username = %username, count, "Multiple user records share a username");
                Err(LookupError::AmbiguousMatch {
                    username: username.to_string(),
                    count,
                })
            }
        }
    }

    /// Check whether a record with this username exists.
    ///
    /// Only the `id` column is requested, so stored passwords never cross the
    /// wire for an existence check.
    pub async fn user_exists(&self, username: &str) -> Result<bool> {
        let rows: Vec<serde_json::Value> = self.query_username(username, Some("id")).await?;
        let exists = !rows.is_empty();

        debug!(username = %username, exists, "User existence checked");
        Ok(exists)
    }

    /// Probe the REST endpoint.
    ///
    /// Returns the status code when the store answers with success.
    pub async fn check_connection(&self) -> Result<u16> {
        let url = format!("{}/rest/v1/", self.base_url);
        debug!(url = %url, "Testing store connection");

        let response = self.http.get(&url).send().await.map_err(map_transport_error)?;
        let status = response.status();

        if status.is_success() {
            info!(status = status.as_u16(), "Connected to user store");
            Ok(status.as_u16())
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %truncate(&body), "User store connection check failed");
            Err(LookupError::Status {
                status: status.as_u16(),
            })
        }
    }

    /// Issue `GET /rest/v1/{table}?username=eq.{username}` and parse the rows.
    async fn query_username<T: DeserializeOwned>(
        &self,
        username: &str,
        select: Option<&str>,
    ) -> Result<Vec<T>> {
        if username.trim().is_empty() {
            return Err(LookupError::invalid_input("Username cannot be empty"));
        }

        let url = format!("{}/rest/v1/{}", self.base_url, self.table);
        debug!(url = %url, username = %username, "Querying user store");

        // The filter value goes through the query serializer so it is
        // percent-encoded rather than spliced into the URL.
        let mut params = vec![("username", format!("eq.{}", username))];
        if let Some(columns) = select {
            params.push(("select", columns.to_string()));
        }

        let response = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                status = %status,
                username = %username,
                body = %truncate(&body),
                "User store rejected lookup"
            );
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!(username = %username, error = %e, "User store returned an unreadable body");
            LookupError::malformed(format!("Failed to parse user records: {}", e))
        })
    }
}

#[async_trait]
impl UserDirectory for CredentialStoreClient {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        CredentialStoreClient::find_by_username(self, username).await
    }

    async fn user_exists(&self, username: &str) -> Result<bool> {
        CredentialStoreClient::user_exists(self, username).await
    }
}

/// Build the `apikey` and `Authorization` headers sent with every request.
fn auth_headers(api_key: &str) -> Result<HeaderMap> {
    let invalid = |_| LookupError::configuration("API key contains invalid header characters");

    let mut key = HeaderValue::from_str(api_key).map_err(invalid)?;
    key.set_sensitive(true);

    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(invalid)?;
    bearer.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static("apikey"), key);
    headers.insert(AUTHORIZATION, bearer);
    Ok(headers)
}

fn map_transport_error(e: reqwest::Error) -> LookupError {
    if e.is_timeout() {
        LookupError::Timeout
    } else if e.is_connect() {
        LookupError::network(format!("Store unreachable: {}", e))
    } else if e.is_decode() {
        LookupError::malformed(e.to_string())
    } else {
        LookupError::network(e.to_string())
    }
}

fn truncate(body: &str) -> String {
    body.chars().take(MAX_LOGGED_BODY).collect()
}
