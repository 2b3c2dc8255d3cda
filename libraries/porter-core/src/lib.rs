//! Porter Core
//!
//! Domain types, traits, and error handling shared by the Porter crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `UserRecord`, `Credential`, `AuthOutcome`
//! - **Core Traits**: `UserDirectory`, the seam between the remote lookup and
//!   the authentication decision
//! - **Error Handling**: `LookupError` and the `Result` alias
//!
//! # Example
//!
//! ```rust
//! use porter_core::{AuthOutcome, Credential};
//!
//! let credential = Credential::new("alice", "secret123");
//! assert!(credential.validate().is_ok());
//!
//! let outcome = AuthOutcome::InvalidCredentials;
//! assert!(!outcome.is_authenticated());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{LookupError, Result};
pub use traits::UserDirectory;
pub use types::{validate_username, AuthOutcome, Credential, UserRecord};
