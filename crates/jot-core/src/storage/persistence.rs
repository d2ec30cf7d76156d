//! JSON file persistence
//!
//! Each collection lives in its own file as a pretty-printed JSON array.
//! Writes go through a temp file and a rename so a reader never sees a
//! half-written array.
//!
//! Files:
//! - `notes.json`
//! - `todos.json`
//! - `ideas.json`

use std::fs::{self, File};
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::error::{StorageError, StorageResult};

/// One collection of records backed by a single JSON file
#[derive(Debug)]
pub struct JsonCollection<R> {
    path: PathBuf,
    _record: PhantomData<R>,
}

impl<R> JsonCollection<R>
where
    R: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the backing file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read and parse the file, reporting every failure
    pub fn read(&self) -> StorageResult<Vec<R>> {
        let content = fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Load the collection, treating an unreadable file as empty
    ///
    /// A missing or corrupt file must not make the tool unusable, so read
    /// failures become an empty list. The next save overwrites the file.
    pub fn load(&self) -> Vec<R> {
        match self.read() {
            Ok(records) => {
                debug!("Loaded {} record(s) from {:?}", records.len(), self.path);
                records
            }
            Err(e) if e.is_missing() => {
                debug!("{:?} does not exist yet", self.path);
                Vec::new()
            }
            Err(e) => {
                warn!("Treating {:?} as empty: {}", self.path, e);
                Vec::new()
            }
        }
    }

    /// Replace the file with the given records
    pub fn save(&self, records: &[R]) -> StorageResult<()> {
        let mut json =
            serde_json::to_string_pretty(records).map_err(|source| StorageError::Encode {
                path: self.path.clone(),
                source,
            })?;
        json.push('\n');

        atomic_write(&self.path, json.as_bytes())?;
        debug!("Saved {} record(s) to {:?}", records.len(), self.path);
        Ok(())
    }

    /// Seed the file with an empty array if it does not exist yet
    pub fn ensure_exists(&self) -> StorageResult<()> {
        if self.exists() {
            return Ok(());
        }
        atomic_write(&self.path, b"[]\n")
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// This ensures the target file is never left in a partially-written state.
pub(crate) fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    // Create temp file in the same directory (for atomic rename)
    let temp_path = path.with_extension("json.tmp");

    let write_err = |source: std::io::Error| StorageError::Write {
        path: temp_path.clone(),
        source,
    };

    let mut file = File::create(&temp_path).map_err(write_err)?;
    file.write_all(data).map_err(write_err)?;
    file.sync_all().map_err(write_err)?;

    fs::rename(&temp_path, path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        StorageError::Replace {
            path: path.to_path_buf(),
            temp: temp_path.clone(),
            source,
        }
    })?;

    Ok(())
}
