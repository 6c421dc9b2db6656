//! Console shell: menus, input collection, result lines
//!
//! Presentation only; no invariant logic lives here. Business errors are
//! printed and control returns to the menu. Only terminal I/O failures
//! and end of input abort the loop.

mod books;
mod checkouts;
mod users;

use std::io::{self, Write};

use crate::repository::Repository;

/// Outcome of one submenu pass.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Back,
    Exit,
}

pub struct Shell {
    repository: Repository,
}

impl Shell {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Run the menu loop until the user chooses Exit.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            println!(
                "\nLibrary Management System\n\
                 1. Book Management\n\
                 2. User Management\n\
                 3. Checkout Management\n\
                 4. Exit"
            );
            let flow = match prompt("Enter choice: ")?.as_str() {
                "1" => books::menu(&mut self.repository)?,
                "2" => users::menu(&mut self.repository)?,
                "3" => checkouts::menu(&mut self.repository)?,
                "4" => Flow::Exit,
                _ => {
                    println!("Invalid choice, please try again.");
                    Flow::Back
                }
            };
            if flow == Flow::Exit {
                println!("Exiting.");
                return Ok(());
            }
        }
    }
}

/// Print a prompt and read one trimmed line.
pub(crate) fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        anyhow::bail!("end of input");
    }
    Ok(line.trim().to_string())
}

/// Empty input means "skip this field".
pub(crate) fn optional(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
