//! User management submenu

use validator::Validate;

use crate::error::AppError;
use crate::models::user::{NewUser, UserPatch};
use crate::repository::Repository;

use super::{optional, prompt, Flow};

pub(crate) fn menu(repo: &mut Repository) -> anyhow::Result<Flow> {
    loop {
        println!(
            "\nUser Management\n\
             1. Add User\n\
             2. Delete User\n\
             3. Update User\n\
             4. List Users\n\
             5. Find User\n\
             6. Back to Main Menu\n\
             7. Exit"
        );
        match prompt("Enter choice: ")?.as_str() {
            "1" => add_user(repo)?,
            "2" => delete_user(repo)?,
            "3" => update_user(repo)?,
            "4" => list_users(repo),
            "5" => find_users(repo)?,
            "6" => return Ok(Flow::Back),
            "7" => return Ok(Flow::Exit),
            _ => println!("Invalid choice, please try again."),
        }
    }
}

fn add_user(repo: &mut Repository) -> anyhow::Result<()> {
    let payload = NewUser {
        name: prompt("Enter user name: ")?,
        user_id: prompt("Enter user ID: ")?,
    };
    if let Err(errors) = payload.validate() {
        println!("{}", AppError::from(errors));
        return Ok(());
    }

    match repo.users.add(payload) {
        Ok(()) => println!("User added successfully."),
        Err(e) => println!("Failed to add user: {e}"),
    }
    Ok(())
}

fn delete_user(repo: &mut Repository) -> anyhow::Result<()> {
    let user_id = prompt("Enter the user ID of the user to delete: ")?;
    if user_id.is_empty() {
        println!("User ID cannot be empty.");
        return Ok(());
    }

    match repo.users.delete(&user_id) {
        Ok(()) => println!("User deleted successfully."),
        Err(e) => println!("Failed to delete user: {e}"),
    }
    Ok(())
}

fn update_user(repo: &mut Repository) -> anyhow::Result<()> {
    let user_id = prompt("Enter the user ID of the user to update: ")?;
    if user_id.is_empty() {
        println!("User ID cannot be empty.");
        return Ok(());
    }

    let patch = UserPatch {
        name: optional(prompt("Enter the new name (press enter to skip): ")?),
        user_id: optional(prompt("Enter the new user ID (press enter to skip): ")?),
    };

    match repo.users.update(&user_id, patch) {
        Ok(()) => println!("User updated successfully."),
        Err(e) => println!("Failed to update user: {e}"),
    }
    Ok(())
}

fn list_users(repo: &Repository) {
    let users = repo.users.all();
    if users.is_empty() {
        println!("\nNo users in the system.");
        return;
    }
    println!("\nUsers:");
    for user in users {
        println!("{user}");
    }
}

fn find_users(repo: &Repository) -> anyhow::Result<()> {
    let term = prompt("Enter a search term to find users (name or user ID): ")?;
    if term.is_empty() {
        println!("Search term cannot be empty.");
        return Ok(());
    }

    let found = repo.users.search(&term);
    if found.is_empty() {
        println!("No users found matching the search term.");
    } else {
        println!("\nFound Users:");
        for user in found {
            println!("{user}");
        }
    }
    Ok(())
}
