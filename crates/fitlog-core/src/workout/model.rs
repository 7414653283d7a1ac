//! Workout entry domain model.

use crate::catalog::Category;
use crate::error::{FitlogError, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A single recorded workout result, owned by exactly one user.
///
/// Entries are immutable once written: there is no edit or delete
/// operation anywhere in the dialogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    /// When the entry was recorded (local to entry creation)
    pub recorded_at: DateTime<Local>,
    /// Exercise name, either from the catalog or free text
    pub exercise: String,
    /// Number of sets performed, always >= 1
    pub sets: u32,
    /// Weight used in kilograms, always >= 0 (0 means bodyweight)
    pub weight: f64,
    /// Category the exercise belongs to, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl WorkoutEntry {
    /// Creates a new entry stamped with the current local time.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `sets` is zero or `weight` is
    /// negative or not finite.
    pub fn new(
        exercise: impl Into<String>,
        sets: u32,
        weight: f64,
        category: Option<Category>,
    ) -> Result<Self> {
        if sets == 0 {
            return Err(FitlogError::validation("set count must be at least 1"));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(FitlogError::validation("weight must be >= 0"));
        }

        Ok(Self {
            recorded_at: Local::now(),
            exercise: exercise.into(),
            sets,
            weight,
            category,
        })
    }
}
