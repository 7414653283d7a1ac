//! Workout log DTOs.

use chrono::{DateTime, Local};
use fitlog_core::workout::WorkoutEntry;
use serde::{Deserialize, Serialize};

/// Current workout log document schema version.
pub const WORKOUT_LOG_SCHEMA_VERSION: u32 = 1;

fn current_version() -> u32 {
    WORKOUT_LOG_SCHEMA_VERSION
}

/// One persisted workout entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntryDto {
    pub recorded_at: DateTime<Local>,
    pub exercise: String,
    pub sets: u32,
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl From<WorkoutEntry> for WorkoutEntryDto {
    fn from(entry: WorkoutEntry) -> Self {
        WorkoutEntryDto {
            recorded_at: entry.recorded_at,
            exercise: entry.exercise,
            sets: entry.sets,
            weight: entry.weight,
            category: entry.category.map(|c| c.to_string()),
        }
    }
}

impl From<WorkoutEntryDto> for WorkoutEntry {
    fn from(dto: WorkoutEntryDto) -> Self {
        WorkoutEntry {
            recorded_at: dto.recorded_at,
            exercise: dto.exercise,
            sets: dto.sets,
            weight: dto.weight,
            // An unknown category label (from a newer or older schema)
            // degrades to "uncategorized" rather than failing the load.
            category: dto.category.and_then(|s| s.parse().ok()),
        }
    }
}

/// V1: one append-only JSON document per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLogDocument {
    #[serde(default = "current_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub entries: Vec<WorkoutEntryDto>,
}

impl Default for WorkoutLogDocument {
    fn default() -> Self {
        Self {
            schema_version: WORKOUT_LOG_SCHEMA_VERSION,
            entries: Vec::new(),
        }
    }
}
