//! Hydration entry domain model.

use crate::error::{FitlogError, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A single recorded water intake, owned by exactly one user.
///
/// Same immutability contract as workout entries: append-only, never
/// edited or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydrationEntry {
    /// When the entry was recorded (local to entry creation)
    pub recorded_at: DateTime<Local>,
    /// Volume drunk in milliliters, always > 0
    pub volume_ml: u32,
}

impl HydrationEntry {
    /// Creates a new entry stamped with the current local time.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `volume_ml` is zero.
    pub fn new(volume_ml: u32) -> Result<Self> {
        if volume_ml == 0 {
            return Err(FitlogError::validation("volume must be a positive number"));
        }

        Ok(Self {
            recorded_at: Local::now(),
            volume_ml,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_valid() {
        let entry = HydrationEntry::new(250).unwrap();
        assert_eq!(entry.volume_ml, 250);
    }

    #[test]
    fn test_new_entry_rejects_zero_volume() {
        let err = HydrationEntry::new(0).unwrap_err();
        assert!(err.is_validation());
    }
}
