//! Errors returned by store operations

use thiserror::Error;

use crate::query::QueryError;
use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum Error {
    /// Required text was empty or whitespace
    #[error("{kind} text cannot be empty")]
    EmptyText { kind: &'static str },

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl Error {
    /// Whether the error came from user input rather than the filesystem
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::EmptyText { .. } | Error::Query(_))
    }

    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Error::Storage(e) => e.recovery_suggestion(),
            Error::Query(QueryError::AmbiguousId { .. }) => {
                Some("Type more characters of the id, or use the list position.")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
