//! Checkout ledger: loans linking users to books

use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    models::checkout::CheckoutRecord,
    storage::Storage,
};

use super::books::BookRepository;

/// Most books a single user may hold at once.
const BORROW_LIMIT: usize = 3;

/// Manages active checkout records and flips book availability as a side
/// effect. The book registry is caller-supplied per call; user IDs are
/// never validated against the user registry.
pub struct CheckoutRepository {
    store: Box<dyn Storage<CheckoutRecord>>,
    checkouts: Vec<CheckoutRecord>,
}

impl CheckoutRepository {
    /// Load the ledger from the given store.
    pub fn new(store: Box<dyn Storage<CheckoutRecord>>) -> AppResult<Self> {
        let checkouts = store.load_all()?;
        Ok(Self { store, checkouts })
    }

    /// All active records, in collection order.
    pub fn all(&self) -> &[CheckoutRecord] {
        &self.checkouts
    }

    /// Check a book out to a user.
    ///
    /// Checks run in order, each one short-circuiting: the book must not
    /// already be on the ledger, the user must be under the borrow limit,
    /// and the book must exist with its availability flag set. The book
    /// write lands before the ledger write; if the ledger write fails the
    /// flag flip is undone so the two files stay in step.
    pub fn checkout(
        &mut self,
        books: &mut BookRepository,
        user_id: &str,
        isbn: &str,
    ) -> AppResult<()> {
        if self.checkouts.iter().any(|c| c.isbn == isbn) {
            return Err(AppError::NotAvailable(format!(
                "book {isbn} is already checked out"
            )));
        }

        let held = self
            .checkouts
            .iter()
            .filter(|c| c.user_id == user_id)
            .count();
        if held >= BORROW_LIMIT {
            return Err(AppError::BorrowLimitReached(format!(
                "user {user_id} already holds {held} books"
            )));
        }

        let book = books
            .find_by_isbn(isbn)
            .ok_or_else(|| AppError::NotFound(format!("no book with ISBN {isbn}")))?;
        if !book.available {
            return Err(AppError::NotAvailable(format!("book {isbn} is not available")));
        }

        books.set_available(isbn, false)?;
        self.checkouts.push(CheckoutRecord {
            user_id: user_id.to_string(),
            isbn: isbn.to_string(),
        });
        if let Err(e) = self.save() {
            self.checkouts.pop();
            let _ = books.set_available(isbn, true);
            return Err(e);
        }

        debug!(%user_id, %isbn, "book checked out");
        Ok(())
    }

    /// Check a book back in by ISBN.
    ///
    /// Removes the matching record and, if the book still exists, marks it
    /// available again. A book with a stale availability flag but no
    /// ledger record cannot be checked in.
    pub fn checkin(&mut self, books: &mut BookRepository, isbn: &str) -> AppResult<()> {
        let pos = self
            .checkouts
            .iter()
            .position(|c| c.isbn == isbn)
            .ok_or_else(|| AppError::NotFound(format!("book {isbn} is not checked out")))?;

        let record = self.checkouts.remove(pos);
        if books.find_by_isbn(isbn).is_some() {
            if let Err(e) = books.set_available(isbn, true) {
                self.checkouts.insert(pos, record);
                return Err(e);
            }
        }
        if let Err(e) = self.save() {
            self.checkouts.insert(pos, record);
            if books.find_by_isbn(isbn).is_some() {
                let _ = books.set_available(isbn, false);
            }
            return Err(e);
        }

        debug!(%isbn, "book checked in");
        Ok(())
    }

    /// All records held by one user, in collection order.
    pub fn list_for_user(&self, user_id: &str) -> Vec<&CheckoutRecord> {
        self.checkouts
            .iter()
            .filter(|c| c.user_id == user_id)
            .collect()
    }

    fn save(&self) -> AppResult<()> {
        self.store.save_all(&self.checkouts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::{Book, NewBook};
    use crate::storage::MockStorage;

    fn book_repo(isbns: &[&str]) -> BookRepository {
        let mut store = MockStorage::<Book>::new();
        store.expect_load_all().return_once(|| Ok(Vec::new()));
        store.expect_save_all().returning(|_| Ok(()));
        let mut repo = BookRepository::new(Box::new(store)).unwrap();
        for isbn in isbns {
            repo.add(NewBook {
                title: format!("Book {isbn}"),
                author: "Author".to_string(),
                isbn: isbn.to_string(),
            })
            .unwrap();
        }
        repo
    }

    fn empty_ledger() -> CheckoutRepository {
        let mut store = MockStorage::<CheckoutRecord>::new();
        store.expect_load_all().return_once(|| Ok(Vec::new()));
        store.expect_save_all().returning(|_| Ok(()));
        CheckoutRepository::new(Box::new(store)).unwrap()
    }

    #[test]
    fn checkout_flips_availability_and_rejects_a_second_borrower() {
        let mut books = book_repo(&["111"]);
        let mut ledger = empty_ledger();

        ledger.checkout(&mut books, "u1", "111").unwrap();
        assert!(!books.find_by_isbn("111").unwrap().available);

        assert!(matches!(
            ledger.checkout(&mut books, "u1", "111"),
            Err(AppError::NotAvailable(_))
        ));
        assert!(matches!(
            ledger.checkout(&mut books, "u2", "111"),
            Err(AppError::NotAvailable(_))
        ));
        assert_eq!(ledger.all().len(), 1);
    }

    #[test]
    fn fourth_checkout_hits_the_borrow_limit() {
        let mut books = book_repo(&["111", "222", "333", "444"]);
        let mut ledger = empty_ledger();

        for isbn in ["111", "222", "333"] {
            ledger.checkout(&mut books, "u1", isbn).unwrap();
        }
        assert!(matches!(
            ledger.checkout(&mut books, "u1", "444"),
            Err(AppError::BorrowLimitReached(_))
        ));
        // Another user is unaffected by u1's limit
        ledger.checkout(&mut books, "u2", "444").unwrap();
    }

    #[test]
    fn checkout_of_unknown_book_is_not_found() {
        let mut books = book_repo(&[]);
        let mut ledger = empty_ledger();
        assert!(matches!(
            ledger.checkout(&mut books, "u1", "999"),
            Err(AppError::NotFound(_))
        ));
        assert!(ledger.all().is_empty());
    }

    #[test]
    fn checkout_of_unavailable_book_is_rejected() {
        let mut books = book_repo(&["111"]);
        // Stale flag: unavailable but not on the ledger
        books.set_available("111", false).unwrap();

        let mut ledger = empty_ledger();
        assert!(matches!(
            ledger.checkout(&mut books, "u1", "111"),
            Err(AppError::NotAvailable(_))
        ));
    }

    #[test]
    fn checkin_restores_availability_and_clears_the_record() {
        let mut books = book_repo(&["111", "222"]);
        let mut ledger = empty_ledger();

        ledger.checkout(&mut books, "u1", "111").unwrap();
        ledger.checkout(&mut books, "u1", "222").unwrap();
        ledger.checkin(&mut books, "111").unwrap();

        assert!(books.find_by_isbn("111").unwrap().available);
        let remaining = ledger.list_for_user("u1");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].isbn, "222");
    }

    #[test]
    fn checkin_without_a_record_is_not_found() {
        let mut books = book_repo(&["111"]);
        books.set_available("111", false).unwrap();

        let mut ledger = empty_ledger();
        assert!(matches!(
            ledger.checkin(&mut books, "111"),
            Err(AppError::NotFound(_))
        ));
        // The stale flag is left alone
        assert!(!books.find_by_isbn("111").unwrap().available);
    }

    #[test]
    fn checkin_survives_a_deleted_book() {
        let mut books = book_repo(&["111"]);
        let mut ledger = empty_ledger();

        ledger.checkout(&mut books, "u1", "111").unwrap();
        books.delete("111").unwrap();
        ledger.checkin(&mut books, "111").unwrap();
        assert!(ledger.all().is_empty());
    }

    #[test]
    fn failed_ledger_write_rolls_back_the_availability_flip() {
        let mut books = book_repo(&["111"]);

        let mut store = MockStorage::<CheckoutRecord>::new();
        store.expect_load_all().return_once(|| Ok(Vec::new()));
        store.expect_save_all().returning(|_| {
            Err(AppError::Io {
                path: "checkouts.json".into(),
                source: std::io::Error::other("disk full"),
            })
        });
        let mut ledger = CheckoutRepository::new(Box::new(store)).unwrap();

        assert!(ledger.checkout(&mut books, "u1", "111").is_err());
        assert!(ledger.all().is_empty());
        assert!(books.find_by_isbn("111").unwrap().available);
    }
}
