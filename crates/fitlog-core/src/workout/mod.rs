//! Workout domain module.
//!
//! # Module Structure
//!
//! - `model`: Workout entry domain model (`WorkoutEntry`)
//! - `repository`: Repository trait for workout history persistence

mod model;
mod repository;

// Re-export public API
pub use model::WorkoutEntry;
pub use repository::WorkoutLogRepository;
