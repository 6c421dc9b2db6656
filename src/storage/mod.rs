//! Persistence layer: wholesale load/save of record collections

pub mod json;

pub use json::JsonFileStore;

use crate::error::AppResult;

/// Persistence strategy for one record collection.
///
/// Repositories keep the in-memory collection as the source of truth and
/// write it back in full after every mutation. Implementations only need
/// to read and rewrite the whole collection; swapping in a different
/// strategy (atomic rename, WAL) must not touch business rules.
#[cfg_attr(test, mockall::automock)]
pub trait Storage<T: 'static> {
    /// Read the full collection. A missing backing file is an empty
    /// collection, not an error.
    fn load_all(&self) -> AppResult<Vec<T>>;

    /// Overwrite the backing file with the full collection.
    fn save_all(&self, records: &[T]) -> AppResult<()>;
}
