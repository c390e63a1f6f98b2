// Database migrations for catchlog
// Creates and updates the database schema

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Current schema version
pub const SCHEMA_VERSION: i32 = 2;

/// Run all necessary migrations to bring the database up to date
pub fn run_migrations(conn: &Connection) -> Result<()> {
    let current_version = get_schema_version(conn)?;

    if current_version < 1 {
        migrate_v1(conn)?;
    }

    if current_version < 2 {
        migrate_v2(conn)?;
    }

    Ok(())
}

/// Get the current schema version from the database
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    // Check if schema_version table exists
    let table_exists: bool = conn
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='schema_version'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(false);

    if !table_exists {
        return Ok(0);
    }

    let version: i32 = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| {
            row.get(0)
        })
        .unwrap_or(0);

    Ok(version)
}

/// Initial schema creation (version 1)
fn migrate_v1(conn: &Connection) -> Result<()> {
    log::info!("Running database migration v1");

    conn.execute_batch(
        r#"
        -- Schema version tracking
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Settings table: key-value store for UI preferences
        CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            value_type TEXT NOT NULL DEFAULT 'string',
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Catches table: one row per logged catch
        CREATE TABLE IF NOT EXISTS catches (
            id TEXT PRIMARY KEY NOT NULL,
            location TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            date TEXT NOT NULL,
            image TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Tags table: free-text labels per catch, position keeps display order
        CREATE TABLE IF NOT EXISTS catch_tags (
            catch_id TEXT NOT NULL,
            position INTEGER NOT NULL,
            tag TEXT NOT NULL,
            PRIMARY KEY (catch_id, position),
            FOREIGN KEY (catch_id) REFERENCES catches(id) ON DELETE CASCADE
        );

        -- Indexes for date-range scans and tag lookups
        CREATE INDEX IF NOT EXISTS idx_catches_date ON catches(date);
        CREATE INDEX IF NOT EXISTS idx_catch_tags_tag ON catch_tags(tag);

        -- Record migration
        INSERT INTO schema_version (version) VALUES (1);
    "#,
    )
    .context("Failed to run migration v1")?;

    log::info!("Migration v1 completed successfully");
    Ok(())
}

/// Geotagging columns for the map view (version 2)
fn migrate_v2(conn: &Connection) -> Result<()> {
    log::info!("Running database migration v2 - Catch coordinates");

    conn.execute_batch(
        r#"
        -- Optional coordinates, absent until a catch is geotagged
        ALTER TABLE catches ADD COLUMN latitude REAL;
        ALTER TABLE catches ADD COLUMN longitude REAL;

        -- Record migration
        INSERT INTO schema_version (version) VALUES (2);
    "#,
    )
    .context("Failed to run migration v2")?;

    log::info!("Migration v2 completed successfully");
    Ok(())
}
