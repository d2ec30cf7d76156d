//! Errors from reading and writing collection files
//!
//! Read-side errors (`Read`, `Corrupt`) are swallowed by
//! `JsonCollection::load`. Everything else reaches the user with a hint.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Could not create data directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exists but does not hold a JSON array of records
    #[error("'{path}' is not a valid record list: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not encode records for '{path}': {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Writing or syncing the temp file failed
    #[error("Could not write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The temp file is complete but could not take the collection file's place
    #[error("Could not replace '{path}' with '{temp}': {source}")]
    Replace {
        path: PathBuf,
        temp: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// The collection file has not been created yet
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            StorageError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }

    fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            StorageError::CreateDir { source, .. }
            | StorageError::Read { source, .. }
            | StorageError::Write { source, .. }
            | StorageError::Replace { source, .. } => Some(source.kind()),
            StorageError::Corrupt { .. } | StorageError::Encode { .. } => None,
        }
    }

    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        if self.io_kind() == Some(io::ErrorKind::PermissionDenied) {
            return Some(
                "Check file permissions, or point JOT_DATA_DIR at a writable directory.",
            );
        }

        match self {
            StorageError::CreateDir { .. } => {
                Some("Pick another location with `jot config set data_dir <path>`.")
            }
            StorageError::Corrupt { .. } => {
                Some("Fix the JSON by hand, or remove the file to start with an empty list.")
            }
            StorageError::Write { .. } | StorageError::Replace { .. } => {
                Some("Make sure the disk is not full and the data directory is writable.")
            }
            _ => None,
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn write_error(kind: io::ErrorKind) -> StorageError {
        StorageError::Write {
            path: PathBuf::from("/data/todos.json.tmp"),
            source: io::Error::new(kind, "boom"),
        }
    }

    #[test]
    fn test_missing_file_is_only_read_not_found() {
        let missing = StorageError::Read {
            path: PathBuf::from("/data/notes.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(missing.is_missing());

        let unreadable = StorageError::Read {
            path: PathBuf::from("/data/notes.json"),
            source: io::Error::new(io::ErrorKind::InvalidData, "bad utf-8"),
        };
        assert!(!unreadable.is_missing());
        assert!(!write_error(io::ErrorKind::NotFound).is_missing());
    }

    #[test]
    fn test_permission_hint_wins_over_variant_hint() {
        let hint = write_error(io::ErrorKind::PermissionDenied)
            .recovery_suggestion()
            .unwrap();
        assert!(hint.contains("JOT_DATA_DIR"));

        let hint = write_error(io::ErrorKind::Other).recovery_suggestion().unwrap();
        assert!(hint.contains("disk"));
    }

    #[test]
    fn test_corrupt_display_and_hint() {
        let source = serde_json::from_str::<Vec<u8>>("{not json").unwrap_err();
        let err = StorageError::Corrupt {
            path: PathBuf::from("/data/notes.json"),
            source,
        };

        assert!(err.to_string().contains("/data/notes.json"));
        assert!(err.recovery_suggestion().unwrap().contains("Fix the JSON"));
    }
}
