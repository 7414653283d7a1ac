//! Catalog domain module.
//!
//! # Module Structure
//!
//! - `model`: Catalog domain models (`Category`, `Catalog`, `UserCatalog`,
//!   `WorkoutTemplate`)
//! - `builtin`: Built-in reference exercises and workout plans
//! - `repository`: Repository trait for user catalog persistence
//! - `resolver`: Merged built-in + user catalog lookup and mutations

pub mod builtin;
mod model;
mod repository;
mod resolver;

// Re-export public API
pub use builtin::{builtin_exercises, builtin_plan, PlanExercise, WorkoutPlan};
pub use model::{Catalog, Category, UserCatalog, WorkoutTemplate};
pub use repository::CatalogRepository;
pub use resolver::{AddExerciseOutcome, AddTemplateOutcome, CatalogResolver};
