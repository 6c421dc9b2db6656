//! Book registry: CRUD and search over the catalog

use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPatch, NewBook},
    storage::Storage,
};

/// Manages the book collection, keyed by ISBN.
///
/// The collection is loaded once at construction and kept resident; every
/// mutation rewrites the backing store in full.
pub struct BookRepository {
    store: Box<dyn Storage<Book>>,
    books: Vec<Book>,
}

impl BookRepository {
    /// Load the catalog from the given store.
    pub fn new(store: Box<dyn Storage<Book>>) -> AppResult<Self> {
        let books = store.load_all()?;
        Ok(Self { store, books })
    }

    /// All books, in collection order.
    pub fn all(&self) -> &[Book] {
        &self.books
    }

    /// Add a new book, available by default. The ISBN must be unused.
    pub fn add(&mut self, new: NewBook) -> AppResult<()> {
        if self.books.iter().any(|b| b.isbn == new.isbn) {
            return Err(AppError::Duplicate(format!(
                "book with ISBN {} already exists",
                new.isbn
            )));
        }

        debug!(isbn = %new.isbn, "adding book");
        self.books.push(Book {
            title: new.title,
            author: new.author,
            isbn: new.isbn,
            available: true,
        });
        self.save()
    }

    /// Delete the book with the given ISBN.
    pub fn delete(&mut self, isbn: &str) -> AppResult<()> {
        let pos = self
            .books
            .iter()
            .position(|b| b.isbn == isbn)
            .ok_or_else(|| AppError::NotFound(format!("no book with ISBN {isbn}")))?;

        self.books.remove(pos);
        self.save()?;

        debug!(%isbn, "book deleted");
        Ok(())
    }

    /// Update the book with the given ISBN, applying only the provided
    /// fields. Moving to an ISBN held by a different book is rejected
    /// before anything is touched. An empty patch still succeeds.
    pub fn update(&mut self, isbn: &str, patch: BookPatch) -> AppResult<()> {
        let pos = self
            .books
            .iter()
            .position(|b| b.isbn == isbn)
            .ok_or_else(|| AppError::NotFound(format!("no book with ISBN {isbn}")))?;

        if let Some(ref new_isbn) = patch.isbn {
            if self
                .books
                .iter()
                .enumerate()
                .any(|(i, b)| i != pos && b.isbn == *new_isbn)
            {
                return Err(AppError::Duplicate(format!(
                    "book with ISBN {new_isbn} already exists"
                )));
            }
        }

        let book = &mut self.books[pos];
        if let Some(title) = patch.title {
            book.title = title;
        }
        if let Some(author) = patch.author {
            book.author = author;
        }
        if let Some(new_isbn) = patch.isbn {
            book.isbn = new_isbn;
        }
        self.save()?;

        debug!(%isbn, "book updated");
        Ok(())
    }

    /// Exact-match lookup by ISBN.
    pub fn find_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.isbn == isbn)
    }

    /// Case-insensitive substring match on title and author, exact-case
    /// substring match on ISBN. Results keep collection order.
    pub fn search(&self, term: &str) -> Vec<&Book> {
        let needle = term.to_lowercase();
        self.books
            .iter()
            .filter(|b| {
                b.title.to_lowercase().contains(&needle)
                    || b.author.to_lowercase().contains(&needle)
                    || b.isbn.contains(term)
            })
            .collect()
    }

    /// Flip a book's availability flag and persist the catalog.
    pub(crate) fn set_available(&mut self, isbn: &str, available: bool) -> AppResult<()> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.isbn == isbn)
            .ok_or_else(|| AppError::NotFound(format!("no book with ISBN {isbn}")))?;

        book.available = available;
        self.save()
    }

    /// Re-persist the current collection.
    pub fn save(&self) -> AppResult<()> {
        self.store.save_all(&self.books)
    }
}
