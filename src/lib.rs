//! Biblos Library Catalog Manager
//!
//! A console application for managing a library's books, users, and
//! checkouts, with each collection persisted wholesale as a JSON file.

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod shell;
pub mod storage;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
