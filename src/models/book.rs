//! Book model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Catalog entry, persisted as one flat JSON object.
///
/// The ISBN is the unique key. It is stored as text, digits-only by
/// convention (enforced at the input boundary, not here).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, ISBN: {}, Status: {}",
            self.title,
            self.author,
            self.isbn,
            if self.available {
                "Available"
            } else {
                "Checked Out"
            }
        )
    }
}

/// Create book request
#[derive(Debug, Deserialize, Validate)]
pub struct NewBook {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author cannot be empty"))]
    pub author: String,
    #[validate(length(min = 1, message = "ISBN cannot be empty"))]
    pub isbn: String,
}

/// Update book request. Omitted fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
}

/// ISBNs are non-empty and numeric by convention.
pub fn is_valid_isbn(isbn: &str) -> bool {
    !isbn.is_empty() && isbn.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isbn_must_be_numeric() {
        assert!(is_valid_isbn("9780441172719"));
        assert!(!is_valid_isbn(""));
        assert!(!is_valid_isbn("978-0441"));
    }

    #[test]
    fn available_defaults_to_true_when_missing() {
        let book: Book =
            serde_json::from_str(r#"{"title": "Dune", "author": "Herbert", "isbn": "111"}"#)
                .unwrap();
        assert!(book.available);
    }
}
