//! Catalog resolver: merges built-in reference data with one user's
//! additions into the single lookup used for input validation and menu
//! generation.

use super::builtin::builtin_exercises;
use super::model::{Catalog, Category, UserCatalog, WorkoutTemplate};
use super::repository::CatalogRepository;
use crate::error::Result;
use crate::user::UserId;
use std::sync::Arc;

/// Outcome of adding a custom exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddExerciseOutcome {
    /// The exercise was appended to the category and persisted.
    Added,
    /// The name already exists in the category; storage was not touched.
    AlreadyExists,
}

/// Outcome of saving a workout template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddTemplateOutcome {
    /// A new template was created.
    Added,
    /// A template with the same name existed and was overwritten
    /// (last-writer-wins).
    Replaced,
}

/// Merges built-in categories/exercises with user-added ones and performs
/// catalog mutations through the repository.
pub struct CatalogResolver {
    repository: Arc<dyn CatalogRepository>,
}

impl CatalogResolver {
    /// Creates a new resolver backed by the given repository.
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    /// Returns the merged catalog for one user.
    ///
    /// User additions are appended after built-ins within each category;
    /// duplicates are suppressed by exact-name match.
    pub async fn resolve(&self, user_id: &UserId) -> Result<Catalog> {
        let user_catalog = self.repository.load(user_id).await?;
        Ok(merge(&user_catalog))
    }

    /// Adds a custom exercise to a category.
    ///
    /// Fails without mutating storage when the name is already present in
    /// the category (built-in or user-added, case-sensitive exact match).
    pub async fn add_exercise(
        &self,
        user_id: &UserId,
        category: Category,
        name: &str,
    ) -> Result<AddExerciseOutcome> {
        let mut user_catalog = self.repository.load(user_id).await?;

        if merge(&user_catalog).contains_exercise(category, name) {
            tracing::debug!(
                "[CatalogResolver] duplicate exercise '{}' in {} for user {}",
                name,
                category,
                user_id
            );
            return Ok(AddExerciseOutcome::AlreadyExists);
        }

        user_catalog
            .exercises
            .entry(category)
            .or_default()
            .push(name.to_string());
        self.repository.store(user_id, &user_catalog).await?;

        Ok(AddExerciseOutcome::Added)
    }

    /// Saves a workout template under a name.
    ///
    /// A template with the same name is overwritten; there is no delete
    /// operation in the dialogue.
    pub async fn add_template(
        &self,
        user_id: &UserId,
        name: &str,
        exercises: Vec<String>,
    ) -> Result<AddTemplateOutcome> {
        let mut user_catalog = self.repository.load(user_id).await?;

        let outcome = match user_catalog.templates.iter_mut().find(|t| t.name == name) {
            Some(existing) => {
                existing.exercises = exercises;
                AddTemplateOutcome::Replaced
            }
            None => {
                user_catalog.templates.push(WorkoutTemplate {
                    name: name.to_string(),
                    exercises,
                });
                AddTemplateOutcome::Added
            }
        };
        self.repository.store(user_id, &user_catalog).await?;

        Ok(outcome)
    }
}

/// Merges built-ins with one user's additions.
fn merge(user_catalog: &UserCatalog) -> Catalog {
    let mut merged = Catalog::default();

    for (category, names) in builtin_exercises() {
        merged
            .exercises
            .insert(*category, names.iter().map(|n| n.to_string()).collect());
    }

    for (category, names) in &user_catalog.exercises {
        let slot = merged.exercises.entry(*category).or_default();
        for name in names {
            if !slot.iter().any(|existing| existing == name) {
                slot.push(name.clone());
            }
        }
    }

    merged.templates = user_catalog.templates.clone();
    merged
}
