//! Record managers: resident collections with write-through persistence

pub mod books;
pub mod checkouts;
pub mod users;

pub use books::BookRepository;
pub use checkouts::CheckoutRepository;
pub use users::UserRepository;

use crate::config::StorageConfig;
use crate::error::AppResult;
use crate::models::{Book, CheckoutRecord, User};
use crate::storage::JsonFileStore;

/// The three record managers, each wired to its own backing file.
pub struct Repository {
    pub books: BookRepository,
    pub users: UserRepository,
    pub checkouts: CheckoutRepository,
}

impl Repository {
    /// Load every collection from the configured paths.
    pub fn open(storage: &StorageConfig) -> AppResult<Self> {
        Ok(Self {
            books: BookRepository::new(Box::new(JsonFileStore::<Book>::new(
                &storage.books_path,
            )))?,
            users: UserRepository::new(Box::new(JsonFileStore::<User>::new(
                &storage.users_path,
            )))?,
            checkouts: CheckoutRepository::new(Box::new(JsonFileStore::<CheckoutRecord>::new(
                &storage.checkouts_path,
            )))?,
        })
    }
}
