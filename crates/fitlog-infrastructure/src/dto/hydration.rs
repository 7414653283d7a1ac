//! Hydration log DTOs.

use chrono::{DateTime, Local};
use fitlog_core::hydration::HydrationEntry;
use serde::{Deserialize, Serialize};

/// Current hydration log document schema version.
pub const HYDRATION_LOG_SCHEMA_VERSION: u32 = 1;

fn current_version() -> u32 {
    HYDRATION_LOG_SCHEMA_VERSION
}

/// One persisted water intake entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydrationEntryDto {
    pub recorded_at: DateTime<Local>,
    pub volume_ml: u32,
}

impl From<HydrationEntry> for HydrationEntryDto {
    fn from(entry: HydrationEntry) -> Self {
        HydrationEntryDto {
            recorded_at: entry.recorded_at,
            volume_ml: entry.volume_ml,
        }
    }
}

impl From<HydrationEntryDto> for HydrationEntry {
    fn from(dto: HydrationEntryDto) -> Self {
        HydrationEntry {
            recorded_at: dto.recorded_at,
            volume_ml: dto.volume_ml,
        }
    }
}

/// V1: one append-only JSON document per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydrationLogDocument {
    #[serde(default = "current_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub entries: Vec<HydrationEntryDto>,
}

impl Default for HydrationLogDocument {
    fn default() -> Self {
        Self {
            schema_version: HYDRATION_LOG_SCHEMA_VERSION,
            entries: Vec::new(),
        }
    }
}
