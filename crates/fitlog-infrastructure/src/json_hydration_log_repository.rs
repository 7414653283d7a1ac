//! JSON-file-based HydrationLogRepository implementation.

use crate::dto::{HydrationEntryDto, HydrationLogDocument};
use crate::paths::FitlogPaths;
use crate::storage::{user_dir, AtomicJsonFile};
use async_trait::async_trait;
use fitlog_core::error::{FitlogError, Result};
use fitlog_core::hydration::{HydrationEntry, HydrationLogRepository};
use fitlog_core::user::UserId;
use std::path::{Path, PathBuf};
use tokio::task;

/// Stores each user's water intake history as one append-only JSON
/// document (`<user id>/hydration.json`), with the same atomicity and
/// isolation guarantees as the workout log.
pub struct JsonHydrationLogRepository {
    base_dir: PathBuf,
}

impl JsonHydrationLogRepository {
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
        user_dir(&self.base_dir, user_id).join("hydration.json")
    }
}

#[async_trait]
impl HydrationLogRepository for JsonHydrationLogRepository {
    async fn list(&self, user_id: &UserId) -> Result<Vec<HydrationEntry>> {
        let path = self.user_file(user_id);
        let document = task::spawn_blocking(move || {
            AtomicJsonFile::<HydrationLogDocument>::new(path).load()
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

    async fn append(&self, user_id: &UserId, entry: HydrationEntry) -> Result<()> {
        let path = self.user_file(user_id);
        let dto = HydrationEntryDto::from(entry);

        task::spawn_blocking(move || {
            AtomicJsonFile::<HydrationLogDocument>::new(path)
                .update(HydrationLogDocument::default(), |document| {
                    document.entries.push(dto);
                    Ok(())
                })
        })
        .await
        .map_err(|e| FitlogError::internal(format!("blocking task failed: {e}")))??;

        tracing::debug!(
            "[JsonHydrationLogRepository] appended entry for user {}",
            user_id
        );
        Ok(())
    }
}
