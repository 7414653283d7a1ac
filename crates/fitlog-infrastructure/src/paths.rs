//! Unified path management for fitlog data files.
//!
//! Every user's durable records live in their own directory so that
//! per-user reads and appends never interfere with another user's files.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for fitlog.
///
/// # Directory Structure
///
/// ```text
/// ~/.local/share/fitlog/       # Data directory
/// └── users/
///     └── <user id>/
///         ├── workouts.json    # Workout history (append-only)
///         ├── hydration.json   # Water intake history (append-only)
///         └── catalog.json     # Custom exercises and templates
/// ```
pub struct FitlogPaths;

impl FitlogPaths {
    /// Returns the fitlog data directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to data directory (e.g., `~/.local/share/fitlog/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join("fitlog"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the root directory holding per-user record directories.
    pub fn users_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("users"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir() {
        let data_dir = FitlogPaths::data_dir().unwrap();
        assert!(data_dir.ends_with("fitlog"));
    }

    #[test]
    fn test_users_dir_under_data_dir() {
        let users_dir = FitlogPaths::users_dir().unwrap();
        assert!(users_dir.ends_with("users"));
        assert!(users_dir.starts_with(FitlogPaths::data_dir().unwrap()));
    }
}
