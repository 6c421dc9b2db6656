//! Book management submenu

use validator::Validate;

use crate::error::AppError;
use crate::models::book::{is_valid_isbn, BookPatch, NewBook};
use crate::repository::Repository;

use super::{optional, prompt, Flow};

pub(crate) fn menu(repo: &mut Repository) -> anyhow::Result<Flow> {
    loop {
        println!(
            "\nBook Management\n\
             1. Add Book\n\
             2. Delete Book\n\
             3. Update Book\n\
             4. List Books\n\
             5. Find Book\n\
             6. Back to Main Menu\n\
             7. Exit"
        );
        match prompt("Enter choice: ")?.as_str() {
            "1" => add_book(repo)?,
            "2" => delete_book(repo)?,
            "3" => update_book(repo)?,
            "4" => list_books(repo),
            "5" => find_books(repo)?,
            "6" => return Ok(Flow::Back),
            "7" => return Ok(Flow::Exit),
            _ => println!("Invalid choice, please try again."),
        }
    }
}

fn add_book(repo: &mut Repository) -> anyhow::Result<()> {
    let payload = NewBook {
        title: prompt("Enter title: ")?,
        author: prompt("Enter author: ")?,
        isbn: prompt("Enter ISBN: ")?,
    };
    if let Err(errors) = payload.validate() {
        println!("{}", AppError::from(errors));
        return Ok(());
    }
    if !is_valid_isbn(&payload.isbn) {
        println!("Invalid ISBN. ISBN should be numeric.");
        return Ok(());
    }

    match repo.books.add(payload) {
        Ok(()) => println!("Book added successfully."),
        Err(e) => println!("Failed to add book: {e}"),
    }
    Ok(())
}

fn delete_book(repo: &mut Repository) -> anyhow::Result<()> {
    let isbn = prompt("Enter the ISBN of the book to delete: ")?;
    if isbn.is_empty() {
        println!("ISBN cannot be empty.");
        return Ok(());
    }

    match repo.books.delete(&isbn) {
        Ok(()) => println!("Book deleted successfully."),
        Err(e) => println!("Failed to delete book: {e}"),
    }
    Ok(())
}

fn update_book(repo: &mut Repository) -> anyhow::Result<()> {
    let isbn = prompt("Enter the ISBN of the book to update: ")?;
    if !is_valid_isbn(&isbn) {
        println!("Invalid ISBN. ISBN should be numeric.");
        return Ok(());
    }

    let patch = BookPatch {
        title: optional(prompt("Enter the new title (press enter to skip): ")?),
        author: optional(prompt("Enter the new author (press enter to skip): ")?),
        isbn: optional(prompt("Enter the new ISBN (press enter to skip): ")?),
    };
    if patch.isbn.as_deref().is_some_and(|i| !is_valid_isbn(i)) {
        println!("Invalid ISBN. ISBN should be numeric.");
        return Ok(());
    }

    match repo.books.update(&isbn, patch) {
        Ok(()) => println!("Book updated successfully."),
        Err(e) => println!("Failed to update book: {e}"),
    }
    Ok(())
}

fn list_books(repo: &Repository) {
    let books = repo.books.all();
    if books.is_empty() {
        println!("\nNo books in the library.");
        return;
    }
    println!("\nBooks:");
    for book in books {
        println!("{book}");
    }
}

fn find_books(repo: &Repository) -> anyhow::Result<()> {
    let term = prompt("Enter a search term to find books (title, author, or ISBN): ")?;
    if term.is_empty() {
        println!("Search term cannot be empty.");
        return Ok(());
    }

    let found = repo.books.search(&term);
    if found.is_empty() {
        println!("No books found matching the search term.");
    } else {
        println!("\nFound Books:");
        for book in found {
            println!("{book}");
        }
    }
    Ok(())
}
