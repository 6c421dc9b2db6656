//! JSON file-backed storage

use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::Storage;
use crate::error::{AppError, AppResult};

/// Stores a collection as a single JSON array, one flat object per record,
/// with object keys matching the record's field names.
///
/// Saves truncate and rewrite the file in place. There is no atomic rename
/// and no locking; a single exclusive process is assumed.
pub struct JsonFileStore<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> Storage<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + 'static,
{
    fn load_all(&self) -> AppResult<Vec<T>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AppError::Io {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        serde_json::from_str(&raw).map_err(|e| AppError::DataFormat {
            path: self.path.clone(),
            source: e,
        })
    }

    fn save_all(&self, records: &[T]) -> AppResult<()> {
        let body = serde_json::to_string_pretty(records).map_err(|e| AppError::DataFormat {
            path: self.path.clone(),
            source: e,
        })?;

        fs::write(&self.path, body).map_err(|e| AppError::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}
