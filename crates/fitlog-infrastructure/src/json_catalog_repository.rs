//! JSON-file-based CatalogRepository implementation.

use crate::dto::CatalogDocument;
use crate::paths::FitlogPaths;
use crate::storage::{user_dir, AtomicJsonFile};
use async_trait::async_trait;
use fitlog_core::catalog::{CatalogRepository, UserCatalog};
use fitlog_core::error::{FitlogError, Result};
use fitlog_core::user::UserId;
use std::path::{Path, PathBuf};
use tokio::task;

/// Stores each user's catalog additions as one JSON document
/// (`<user id>/catalog.json`).
///
/// `store` replaces the whole document under the file lock, so two
/// writers racing on the same user serialize and the last successful
/// write wins.
pub struct JsonCatalogRepository {
    base_dir: PathBuf,
}

impl JsonCatalogRepository {
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
        user_dir(&self.base_dir, user_id).join("catalog.json")
    }
}

#[async_trait]
impl CatalogRepository for JsonCatalogRepository {
    async fn load(&self, user_id: &UserId) -> Result<UserCatalog> {
        let path = self.user_file(user_id);
        let document =
            task::spawn_blocking(move || AtomicJsonFile::<CatalogDocument>::new(path).load())
                .await
                .map_err(|e| FitlogError::internal(format!("blocking task failed: {e}")))??;

        Ok(document.unwrap_or_default().into())
    }

    async fn store(&self, user_id: &UserId, catalog: &UserCatalog) -> Result<()> {
        let path = self.user_file(user_id);
        let document = CatalogDocument::from(catalog.clone());

        task::spawn_blocking(move || {
            AtomicJsonFile::<CatalogDocument>::new(path)
                .update(CatalogDocument::default(), |current| {
                    *current = document;
                    Ok(())
                })
        })
        .await
        .map_err(|e| FitlogError::internal(format!("blocking task failed: {e}")))??;

        tracing::debug!("[JsonCatalogRepository] stored catalog for user {}", user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitlog_core::catalog::{Category, WorkoutTemplate};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_never_seen_user_yields_empty_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonCatalogRepository::new(temp_dir.path()).unwrap();

        let catalog = repository.load(&UserId::from("ghost")).await.unwrap();
        assert_eq!(catalog, UserCatalog::default());
    }

    #[tokio::test]
    async fn test_store_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonCatalogRepository::new(temp_dir.path()).unwrap();
        let user = UserId::from("u1");

        let mut catalog = UserCatalog::default();
        catalog
            .exercises
            .insert(Category::Core, vec!["Dead bug".to_string()]);
        catalog.templates.push(WorkoutTemplate {
            name: "Morning".to_string(),
            exercises: vec!["Plank".to_string(), "Plank".to_string()],
        });

        repository.store(&user, &catalog).await.unwrap();
        assert_eq!(repository.load(&user).await.unwrap(), catalog);
    }

    #[tokio::test]
    async fn test_store_replaces_previous_state() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonCatalogRepository::new(temp_dir.path()).unwrap();
        let user = UserId::from("u1");

        let mut first = UserCatalog::default();
        first
            .exercises
            .insert(Category::Core, vec!["Dead bug".to_string()]);
        repository.store(&user, &first).await.unwrap();

        let mut second = UserCatalog::default();
        second
            .exercises
            .insert(Category::UpperBody, vec!["Dips".to_string()]);
        repository.store(&user, &second).await.unwrap();

        assert_eq!(repository.load(&user).await.unwrap(), second);
    }
}
