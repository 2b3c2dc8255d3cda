//! Porter Store Client
//!
//! HTTP client for the remote user store: a PostgREST-style REST API reached
//! under `/rest/v1/`, authenticated with a fixed API key.
//!
//! # Features
//!
//! - **Lookup**: fetch the single record matching a username
//! - **Existence check**: report whether a username is known
//! - **Connection probe**: confirm the REST endpoint answers
//!
//! # Example
//!
//! ```ignore
//! use porter_store_client::{CredentialStoreClient, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoreConfig::new("https://project.supabase.co", "anon-key");
//!     let client = CredentialStoreClient::new(config)?;
//!
//!     if let Some(record) = client.find_by_username("alice").await? {
//!         println!("Found {} <{}>", record.username, record.email);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod types;

pub use client::CredentialStoreClient;
pub use types::StoreConfig;

// Re-export the error taxonomy so callers need only this crate
pub use porter_core::{LookupError, Result, UserRecord};
