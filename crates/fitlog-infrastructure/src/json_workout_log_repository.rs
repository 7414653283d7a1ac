//! JSON-file-based WorkoutLogRepository implementation.

use crate::dto::{WorkoutEntryDto, WorkoutLogDocument};
use crate::paths::FitlogPaths;
use crate::storage::{user_dir, AtomicJsonFile};
use async_trait::async_trait;
use fitlog_core::error::{FitlogError, Result};
use fitlog_core::user::UserId;
use fitlog_core::workout::{WorkoutEntry, WorkoutLogRepository};
use std::path::{Path, PathBuf};
use tokio::task;

/// Stores each user's workout history as one append-only JSON document.
///
/// Directory structure:
/// ```text
/// base_dir/
/// ├── <user id>/
/// │   ├── workouts.json
/// │   └── ...
/// └── <other user>/
/// ```
///
/// Appends go through [`AtomicJsonFile::update`], so a failed write
/// leaves the previous history untouched and concurrent writers to the
/// same user serialize on the file lock.
pub struct JsonWorkoutLogRepository {
    base_dir: PathBuf,
}

impl JsonWorkoutLogRepository {
    /// Creates a repository rooted at the given directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Creates a repository at the default per-user data location.
    pub fn default_location() -> Result<Self> {
        let base_dir = FitlogPaths::users_dir().map_err(|e| FitlogError::storage(e.to_string()))?;
        Self::new(base_dir)
    }

    fn user_file(&self, user_id: &UserId) -> PathBuf {
        user_dir(&self.base_dir, user_id).join("workouts.json")
    }
}

#[async_trait]
impl WorkoutLogRepository for JsonWorkoutLogRepository {
    async fn list(&self, user_id: &UserId) -> Result<Vec<WorkoutEntry>> {
        let path = self.user_file(user_id);
        let document = task::spawn_blocking(move || {
            AtomicJsonFile::<WorkoutLogDocument>::new(path).load()
        })
        .await
        .map_err(|e| FitlogError::internal(format!("blocking task failed: {e}")))??;

        Ok(document
            .unwrap_or_default()
            .entries
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn append(&self, user_id: &UserId, entry: WorkoutEntry) -> Result<()> {
        let path = self.user_file(user_id);
        let dto = WorkoutEntryDto::from(entry);

        task::spawn_blocking(move || {
            AtomicJsonFile::<WorkoutLogDocument>::new(path)
                .update(WorkoutLogDocument::default(), |document| {
                    document.entries.push(dto);
                    Ok(())
                })
        })
        .await
        .map_err(|e| FitlogError::internal(format!("blocking task failed: {e}")))??;

        tracing::debug!("[JsonWorkoutLogRepository] appended entry for user {}", user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(exercise: &str, sets: u32, weight: f64) -> WorkoutEntry {
        WorkoutEntry::new(exercise, sets, weight, None).unwrap()
    }

    #[tokio::test]
    async fn test_never_seen_user_yields_empty_list() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonWorkoutLogRepository::new(temp_dir.path()).unwrap();

        let entries = repository.list(&UserId::from("ghost")).await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_append_then_list_round_trip_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonWorkoutLogRepository::new(temp_dir.path()).unwrap();
        let user = UserId::from("u1");

        let first = entry("Squats", 4, 52.5);
        let second = entry("Plank", 3, 0.0);
        repository.append(&user, first.clone()).await.unwrap();
        repository.append(&user, second.clone()).await.unwrap();

        let entries = repository.list(&user).await.unwrap();
        assert_eq!(entries, vec![first, second]);
    }

    #[tokio::test]
    async fn test_users_are_isolated() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonWorkoutLogRepository::new(temp_dir.path()).unwrap();
        let alice = UserId::from("alice");
        let bob = UserId::from("bob");

        repository.append(&alice, entry("Squats", 4, 50.0)).await.unwrap();
        repository.append(&bob, entry("Lunges", 3, 20.0)).await.unwrap();
        repository.append(&alice, entry("Squats", 4, 55.0)).await.unwrap();

        let alice_entries = repository.list(&alice).await.unwrap();
        let bob_entries = repository.list(&bob).await.unwrap();
        assert_eq!(alice_entries.len(), 2);
        assert_eq!(bob_entries.len(), 1);
        assert!(alice_entries.iter().all(|e| e.exercise == "Squats"));
        assert_eq!(bob_entries[0].exercise, "Lunges");
    }

    #[tokio::test]
    async fn test_concurrent_appends_to_distinct_users_never_interleave() {
        let temp_dir = TempDir::new().unwrap();
        let repository =
            std::sync::Arc::new(JsonWorkoutLogRepository::new(temp_dir.path()).unwrap());

        let mut handles = Vec::new();
        for user in ["a", "b", "c"] {
            let repository = repository.clone();
            handles.push(tokio::spawn(async move {
                let user_id = UserId::from(user);
                for i in 0..5u32 {
                    repository
                        .append(&user_id, entry(user, i + 1, f64::from(i)))
                        .await
                        .unwrap();
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        for user in ["a", "b", "c"] {
            let entries = repository.list(&UserId::from(user)).await.unwrap();
            assert_eq!(entries.len(), 5);
            assert!(entries.iter().all(|e| e.exercise == user));
        }
    }
}
