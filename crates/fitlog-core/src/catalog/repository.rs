//! Catalog repository trait.
//!
//! Defines the interface for persisting a user's catalog additions.

use super::model::UserCatalog;
use crate::error::Result;
use crate::user::UserId;
use async_trait::async_trait;

/// An abstract repository for user catalog additions (custom exercises
/// and workout templates).
///
/// Only user additions are persisted; built-in reference data lives in
/// [`crate::catalog::builtin`] and is merged at resolve time.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Loads a user's catalog additions.
    ///
    /// A never-seen user yields an empty catalog, not an error.
    async fn load(&self, user_id: &UserId) -> Result<UserCatalog>;

    /// Stores a user's catalog additions, replacing the previous state.
    async fn store(&self, user_id: &UserId, catalog: &UserCatalog) -> Result<()>;
}
