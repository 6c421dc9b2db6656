//! Checkout management submenu

use crate::repository::Repository;

use super::{prompt, Flow};

pub(crate) fn menu(repo: &mut Repository) -> anyhow::Result<Flow> {
    loop {
        println!(
            "\nCheckout Management\n\
             1. Checkout Book\n\
             2. Checkin Book\n\
             3. List User Checkouts\n\
             4. Back to Main Menu\n\
             5. Exit"
        );
        match prompt("Enter choice: ")?.as_str() {
            "1" => checkout_book(repo)?,
            "2" => checkin_book(repo)?,
            "3" => list_user_checkouts(repo)?,
            "4" => return Ok(Flow::Back),
            "5" => return Ok(Flow::Exit),
            _ => println!("Invalid choice, please try again."),
        }
    }
}

fn checkout_book(repo: &mut Repository) -> anyhow::Result<()> {
    let user_id = prompt("Enter user ID: ")?;
    let isbn = prompt("Enter ISBN of the book to checkout: ")?;

    match repo.checkouts.checkout(&mut repo.books, &user_id, &isbn) {
        Ok(()) => println!("Book checked out successfully."),
        Err(e) => println!("Failed to checkout book: {e}"),
    }
    Ok(())
}

fn checkin_book(repo: &mut Repository) -> anyhow::Result<()> {
    let isbn = prompt("Enter ISBN of the book to checkin: ")?;

    match repo.checkouts.checkin(&mut repo.books, &isbn) {
        Ok(()) => println!("Book checked in successfully."),
        Err(e) => println!("Failed to checkin book: {e}"),
    }
    Ok(())
}

fn list_user_checkouts(repo: &mut Repository) -> anyhow::Result<()> {
    let user_id = prompt("Enter user ID to list checkouts: ")?;

    let records = repo.checkouts.list_for_user(&user_id);
    if records.is_empty() {
        println!("No books currently checked out by this user.");
        return Ok(());
    }

    match repo.users.find_by_id(&user_id) {
        Some(user) => println!("\nCheckouts for {}:", user.name),
        None => println!("\nUser Checkouts:"),
    }
    for record in records {
        println!("ISBN: {}", record.isbn);
    }
    Ok(())
}
