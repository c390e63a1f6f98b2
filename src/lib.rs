// Catchlog - local fishing catch logbook
//
// Core pieces:
// - query: stateless filtering and pagination over catch snapshots
// - database: SQLite persistence for catches, tags, and preferences
// - stats: aggregate statistics over a snapshot
// - export: JSON export and share-text formatting

pub mod database;
pub mod export;
pub mod query;
pub mod stats;

pub use database::{CatchDraft, CatchRecord, CatchStore, Preferences};
pub use query::{
    filter_catches, paginate, query_catches, DateRange, FilterCriteria, Page, PageRequest,
};
