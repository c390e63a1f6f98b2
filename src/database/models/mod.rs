// Database models - Re-exports the domain models
//
// This module is split into focused files by domain:
// - catch.rs: catch records, drafts, and tag parsing
// - settings.rs: preference settings

mod catch;
mod settings;

pub use catch::{parse_tags, CatchDraft, CatchRecord, FieldError};
pub use settings::{Preferences, Setting};
