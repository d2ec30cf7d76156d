//! Storage layer
//!
//! Handles JSON persistence of the three record collections.
//!
//! ## Failure policy
//!
//! - **Reads** fail open: a missing or corrupt file loads as an empty list.
//! - **Writes** fail closed: any error is returned to the caller.

pub mod error;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use persistence::JsonCollection;
