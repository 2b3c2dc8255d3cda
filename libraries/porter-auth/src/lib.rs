//! Porter Auth
//!
//! Decides whether a submitted username/password pair is valid, using any
//! [`UserDirectory`](porter_core::UserDirectory) for the lookup.
//!
//! Stored passwords may be plaintext (the legacy layout of the store) or
//! bcrypt hashes; [`PasswordScheme::Auto`] accepts both so a store can be
//! migrated row by row.
//!
//! # Example
//!
//! ```ignore
//! use porter_auth::AuthenticationCheck;
//! use porter_core::AuthOutcome;
//!
//! let check = AuthenticationCheck::new(directory);
//! match check.authenticate("alice", "secret123").await {
//!     AuthOutcome::Authenticated(user) => println!("Welcome back, {}", user.username),
//!     AuthOutcome::InvalidCredentials => println!("Incorrect username or password"),
//!     AuthOutcome::LookupFailed(e) => eprintln!("System error: {}", e),
//! }
//! ```

mod check;
mod password;

pub use check::{AuthPolicy, AuthenticationCheck};
pub use password::{hash_password, is_bcrypt_hash, PasswordScheme};
