//! Porter Server Library
//!
//! HTTP surface over the Porter authentication check: login, a session-backed
//! dashboard, logout, and a user existence check against the remote store.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use routes::create_router;
pub use services::SessionService;
pub use state::AppState;
