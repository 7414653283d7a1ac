//! Hydration log repository trait.
//!
//! Defines the interface for water intake history persistence.

use super::model::HydrationEntry;
use crate::error::Result;
use crate::user::UserId;
use async_trait::async_trait;

/// An abstract repository for a user's water intake history.
///
/// Implementations carry the same durability contract as
/// [`crate::workout::WorkoutLogRepository`]: atomic appends, independent
/// per-user storage, and an empty collection (not an error) for a
/// never-seen user.
#[async_trait]
pub trait HydrationLogRepository: Send + Sync {
    /// Returns all hydration entries for a user in creation order.
    async fn list(&self, user_id: &UserId) -> Result<Vec<HydrationEntry>>;

    /// Appends a single entry to a user's hydration history.
    async fn append(&self, user_id: &UserId, entry: HydrationEntry) -> Result<()>;
}
