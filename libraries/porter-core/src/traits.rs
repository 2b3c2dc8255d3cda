/// Core traits for Porter
use crate::error::Result;
use crate::types::UserRecord;
use async_trait::async_trait;
use std::sync::Arc;

/// Read-only view of a user store.
///
/// Implementations must be thread-safe (`Send + Sync`) as a single directory
/// serves every concurrent authentication check.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find the record whose username equals `username` exactly
    ///
    /// # Returns
    /// * `Ok(Some(record))` - exactly one record matched
    /// * `Ok(None)` - no record matched
    /// * `Err(LookupError)` - the lookup could not be completed
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>>;

    /// Check whether a user with this username exists
    ///
    /// Default implementation performs a full lookup.
    async fn user_exists(&self, username: &str) -> Result<bool> {
        Ok(self.find_by_username(username).await?.is_some())
    }
}

/// Blanket implementation for `Arc<D>` where `D: UserDirectory`.
#[async_trait]
impl<D: UserDirectory + ?Sized> UserDirectory for Arc<D> {
    #[inline]
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        (**self).find_by_username(username).await
    }

    #[inline]
    async fn user_exists(&self, username: &str) -> Result<bool> {
        (**self).user_exists(username).await
    }
}

/// Blanket implementation for `Box<D>` where `D: UserDirectory`.
#[async_trait]
impl<D: UserDirectory + ?Sized> UserDirectory for Box<D> {
    #[inline]
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        (**self).find_by_username(username).await
    }

    #[inline]
    async fn user_exists(&self, username: &str) -> Result<bool> {
        (**self).user_exists(username).await
    }
}
