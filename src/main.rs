//! Biblos - Library Catalog Manager
//!
//! A console-driven catalog of books, users, and checkouts backed by
//! JSON files.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblos::{config::AppConfig, repository::Repository, shell::Shell};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing; logs go to stderr so they stay out of the menus
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("biblos={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Biblos v{}", env!("CARGO_PKG_VERSION"));

    // Load all three collections; a corrupt backing file is fatal here
    let repository = Repository::open(&config.storage)?;

    tracing::info!(
        books = repository.books.all().len(),
        users = repository.users.all().len(),
        checkouts = repository.checkouts.all().len(),
        "Catalog loaded"
    );

    Shell::new(repository).run()
}
