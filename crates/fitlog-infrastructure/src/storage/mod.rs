//! Low-level storage primitives.

mod atomic_json;

pub use atomic_json::{AtomicJsonError, AtomicJsonFile};

use fitlog_core::user::UserId;
use fitlog_core::FitlogError;
use std::path::{Path, PathBuf};

impl From<AtomicJsonError> for FitlogError {
    fn from(err: AtomicJsonError) -> Self {
        match err {
            AtomicJsonError::JsonError(e) => FitlogError::Serialization {
                format: "JSON".to_string(),
                message: e.to_string(),
            },
            other => FitlogError::storage(other.to_string()),
        }
    }
}

/// Returns the directory holding one user's record files.
///
/// The identifier is opaque transport data, so anything that could be
/// interpreted by the file system is replaced before it becomes a path
/// component.
pub(crate) fn user_dir(base_dir: &Path, user_id: &UserId) -> PathBuf {
    let sanitized: String = user_id
        .as_str()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    base_dir.join(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_dir_sanitizes_separators() {
        let dir = user_dir(Path::new("/data"), &UserId::from("../evil/id"));
        assert_eq!(dir, Path::new("/data").join("___evil_id"));
    }

    #[test]
    fn test_user_dir_keeps_plain_ids() {
        let dir = user_dir(Path::new("/data"), &UserId::from("123456789"));
        assert_eq!(dir, Path::new("/data").join("123456789"));
    }
}
