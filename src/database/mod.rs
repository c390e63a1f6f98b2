// Database module for catchlog
// Provides SQLite persistence for catches, their tags, and preference settings

pub mod manager;
pub mod migrations;
pub mod models;
pub mod catches_repo;
pub mod settings_repo;

pub use manager::CatchStore;
pub use models::*;
