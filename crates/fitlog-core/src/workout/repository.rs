//! Workout log repository trait.
//!
//! Defines the interface for workout history persistence.

use super::model::WorkoutEntry;
use crate::error::Result;
use crate::user::UserId;
use async_trait::async_trait;

/// An abstract repository for a user's workout history.
///
/// This trait defines the contract for persisting and retrieving workout
/// entries, decoupling the dialogue logic from the specific storage
/// mechanism (e.g., JSON files, database, remote API).
///
/// # Implementation Notes
///
/// Implementations must guarantee:
/// - A successful `append` is durably visible to the next `list` for the
///   same user; a failed `append` leaves prior data unchanged.
/// - Each user's history is stored independently; listing a never-seen
///   user yields an empty collection, not an error.
#[async_trait]
pub trait WorkoutLogRepository: Send + Sync {
    /// Returns all workout entries for a user in creation order.
    async fn list(&self, user_id: &UserId) -> Result<Vec<WorkoutEntry>>;

    /// Appends a single entry to a user's workout history.
    async fn append(&self, user_id: &UserId, entry: WorkoutEntry) -> Result<()>;
}
