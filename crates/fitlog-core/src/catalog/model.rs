//! Catalog domain models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString};

/// The fixed set of exercise categories.
///
/// Categories are closed: users add exercises *within* a category but can
/// never add a category. Display strings are what the transport shell
/// shows on buttons; dialogue dispatch never compares against them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Category {
    #[strum(serialize = "Upper body")]
    UpperBody,
    #[strum(serialize = "Lower body")]
    LowerBody,
    #[strum(serialize = "Core")]
    Core,
    #[strum(serialize = "Flexibility")]
    Flexibility,
}

/// A named, ordered workout template defined by a user.
///
/// Duplicate exercise names within a template are allowed; the list is
/// stored exactly as the user entered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    /// Template name; saving under an existing name replaces it
    pub name: String,
    /// Ordered exercise names
    pub exercises: Vec<String>,
}

/// A user's own catalog additions: exercises per category plus workout
/// templates. This is the persisted shape; the merged view including
/// built-ins is [`Catalog`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserCatalog {
    /// User-added exercise names, keyed by category
    #[serde(default)]
    pub exercises: BTreeMap<Category, Vec<String>>,
    /// User-defined workout templates in creation order
    #[serde(default)]
    pub templates: Vec<WorkoutTemplate>,
}

/// The merged catalog: built-in exercises with one user's additions
/// appended after them within each category, duplicates suppressed by
/// exact-name match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    /// Merged exercise names, keyed by category
    pub exercises: BTreeMap<Category, Vec<String>>,
    /// User-defined workout templates in creation order
    pub templates: Vec<WorkoutTemplate>,
}

impl Catalog {
    /// Checks whether `name` is a known exercise within `category`
    /// (case-sensitive exact match).
    pub fn contains_exercise(&self, category: Category, name: &str) -> bool {
        self.exercises
            .get(&category)
            .is_some_and(|names| names.iter().any(|n| n == name))
    }

    /// Checks whether `name` is a known exercise in any category.
    pub fn is_valid_exercise(&self, name: &str) -> bool {
        self.exercises
            .values()
            .any(|names| names.iter().any(|n| n == name))
    }

    /// Returns the category an exercise belongs to, if any.
    pub fn category_of(&self, name: &str) -> Option<Category> {
        self.exercises
            .iter()
            .find(|(_, names)| names.iter().any(|n| n == name))
            .map(|(category, _)| *category)
    }

    /// Returns the merged exercise list for one category.
    pub fn exercises_in(&self, category: Category) -> &[String] {
        self.exercises
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns every exercise name across all categories, in category
    /// order, with cross-category duplicates suppressed. Used for menu
    /// generation.
    pub fn all_exercise_names(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for names in self.exercises.values() {
            for name in names {
                if !seen.iter().any(|s| s == name) {
                    seen.push(name.clone());
                }
            }
        }
        seen
    }

    /// Looks up a workout template by exact name.
    pub fn template(&self, name: &str) -> Option<&WorkoutTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        let mut exercises = BTreeMap::new();
        exercises.insert(
            Category::LowerBody,
            vec!["Squats".to_string(), "Lunges".to_string()],
        );
        exercises.insert(Category::Core, vec!["Plank".to_string()]);
        Catalog {
            exercises,
            templates: vec![WorkoutTemplate {
                name: "Morning".to_string(),
                exercises: vec!["Plank".to_string(), "Squats".to_string()],
            }],
        }
    }

    #[test]
    fn test_contains_exercise_is_case_sensitive() {
        let catalog = sample_catalog();
        assert!(catalog.contains_exercise(Category::LowerBody, "Squats"));
        assert!(!catalog.contains_exercise(Category::LowerBody, "squats"));
        assert!(!catalog.contains_exercise(Category::Core, "Squats"));
    }

    #[test]
    fn test_category_of() {
        let catalog = sample_catalog();
        assert_eq!(catalog.category_of("Plank"), Some(Category::Core));
        assert_eq!(catalog.category_of("Deadlift"), None);
    }

    #[test]
    fn test_all_exercise_names_suppresses_duplicates() {
        let mut catalog = sample_catalog();
        catalog
            .exercises
            .get_mut(&Category::Core)
            .unwrap()
            .push("Squats".to_string());
        let names = catalog.all_exercise_names();
        assert_eq!(names.iter().filter(|n| *n == "Squats").count(), 1);
    }

    #[test]
    fn test_category_display_labels() {
        assert_eq!(Category::UpperBody.to_string(), "Upper body");
        assert_eq!(Category::Flexibility.to_string(), "Flexibility");
    }
}
