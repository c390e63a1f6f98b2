// Catch store for catchlog
// Owns the SQLite connection and provides access to the repositories

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::Mutex;

use super::migrations;

/// Persistence store that owns the SQLite connection.
///
/// The query engine never touches this directly; callers load a snapshot
/// with `get_all_catches` and hand that to the pure query functions.
pub struct CatchStore {
    conn: Mutex<Connection>,
    db_path: PathBuf,
}

impl CatchStore {
    /// Open (or create) the store at the specified path.
    pub fn new(db_path: PathBuf) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create database directory")?;
        }

        let conn = Connection::open(&db_path).context("Failed to open database")?;

        // Enable foreign keys so tag rows follow their catch on delete
        conn.execute("PRAGMA foreign_keys = ON", [])
            .context("Failed to enable foreign keys")?;

        migrations::run_migrations(&conn).context("Failed to run database migrations")?;

        log::info!("Catch store initialized at: {:?}", db_path);

        Ok(Self {
            conn: Mutex::new(conn),
            db_path,
        })
    }

    /// Execute a function with access to the database connection
    pub fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to lock database connection: {}", e))?;
        f(&conn)
    }

    /// Get the database path
    pub fn db_path(&self) -> &PathBuf {
        &self.db_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_store_creation() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");

        let store = CatchStore::new(db_path.clone()).unwrap();
        assert!(db_path.exists());

        store
            .with_connection(|conn| {
                let count: i32 =
                    conn.query_row("SELECT COUNT(*) FROM catches", [], |row| row.get(0))?;
                assert_eq!(count, 0);
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_store_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested").join("data").join("test.db");

        CatchStore::new(db_path.clone()).unwrap();
        assert!(db_path.exists());
    }
}
