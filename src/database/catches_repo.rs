// Catches repository for catchlog
// Handles CRUD operations for catch records and their tags

use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::models::CatchRecord;
use super::CatchStore;

impl CatchStore {
    /// Create a new catch
    pub fn create_catch(&self, record: &CatchRecord) -> Result<String> {
        self.with_connection(|conn| create_catch_impl(conn, record))
    }

    /// Get a catch by ID
    pub fn get_catch(&self, id: &str) -> Result<Option<CatchRecord>> {
        self.with_connection(|conn| get_catch_impl(conn, id))
    }

    /// Get all catches, newest logged first.
    ///
    /// This is the snapshot the query engine filters and paginates.
    pub fn get_all_catches(&self) -> Result<Vec<CatchRecord>> {
        self.with_connection(get_all_catches_impl)
    }

    /// Replace a catch wholesale, matched by its id
    pub fn update_catch(&self, record: &CatchRecord) -> Result<()> {
        self.with_connection(|conn| update_catch_impl(conn, record))
    }

    /// Delete a catch
    pub fn delete_catch(&self, id: &str) -> Result<()> {
        self.with_connection(|conn| delete_catch_impl(conn, id))
    }

    /// Get the distinct tag labels across all catches, sorted
    pub fn distinct_tags(&self) -> Result<Vec<String>> {
        self.with_connection(distinct_tags_impl)
    }
}

fn create_catch_impl(conn: &Connection, record: &CatchRecord) -> Result<String> {
    conn.execute(
        r#"
        INSERT INTO catches (id, location, description, date, image, latitude, longitude)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
        params![
            record.id,
            record.location,
            record.description,
            record.date,
            record.image,
            record.latitude,
            record.longitude,
        ],
    )
    .context("Failed to create catch")?;

    insert_tags(conn, &record.id, &record.tags)?;

    log::debug!("Created catch {}", record.id);
    Ok(record.id.clone())
}

fn get_catch_impl(conn: &Connection, id: &str) -> Result<Option<CatchRecord>> {
    let mut stmt = conn
        .prepare(
            r#"
            SELECT id, location, description, date, image, latitude, longitude
            FROM catches WHERE id = ?
            "#,
        )
        .context("Failed to prepare get_catch query")?;

    let result = stmt.query_row(params![id], |row| {
        Ok(CatchRecord {
            id: row.get(0)?,
            location: row.get(1)?,
            description: row.get(2)?,
            date: row.get(3)?,
            tags: Vec::new(),
            image: row.get(4)?,
            latitude: row.get(5)?,
            longitude: row.get(6)?,
        })
    });

    match result {
        Ok(mut record) => {
            record.tags = get_catch_tags(conn, id)?;
            Ok(Some(record))
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e).context("Failed to get catch"),
    }
}

fn get_all_catches_impl(conn: &Connection) -> Result<Vec<CatchRecord>> {
    let mut stmt = conn
        .prepare(
            r#"
            SELECT id, location, description, date, image, latitude, longitude
            FROM catches
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .context("Failed to prepare get_all_catches query")?;

    let catches = stmt
        .query_map([], |row| {
            Ok(CatchRecord {
                id: row.get(0)?,
                location: row.get(1)?,
                description: row.get(2)?,
                date: row.get(3)?,
                tags: Vec::new(),
                image: row.get(4)?,
                latitude: row.get(5)?,
                longitude: row.get(6)?,
            })
        })
        .context("Failed to query catches")?;

    let mut results = Vec::new();
    for catch_result in catches {
        let mut record = catch_result.context("Failed to read catch row")?;
        record.tags = get_catch_tags(conn, &record.id)?;
        results.push(record);
    }

    Ok(results)
}

fn update_catch_impl(conn: &Connection, record: &CatchRecord) -> Result<()> {
    let changes = conn
        .execute(
            r#"
            UPDATE catches
            SET location = ?2, description = ?3, date = ?4, image = ?5,
                latitude = ?6, longitude = ?7
            WHERE id = ?1
            "#,
            params![
                record.id,
                record.location,
                record.description,
                record.date,
                record.image,
                record.latitude,
                record.longitude,
            ],
        )
        .context("Failed to update catch")?;

    if changes == 0 {
        log::warn!("update_catch: no catch with id {}", record.id);
        return Ok(());
    }

    // Wholesale replacement: the old tag list does not survive the edit
    conn.execute(
        "DELETE FROM catch_tags WHERE catch_id = ?",
        params![record.id],
    )
    .context("Failed to clear catch tags")?;
    insert_tags(conn, &record.id, &record.tags)?;

    Ok(())
}

fn delete_catch_impl(conn: &Connection, id: &str) -> Result<()> {
    conn.execute("DELETE FROM catches WHERE id = ?", params![id])
        .context("Failed to delete catch")?;
    Ok(())
}

fn distinct_tags_impl(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT DISTINCT tag FROM catch_tags ORDER BY tag ASC")
        .context("Failed to prepare distinct_tags query")?;

    let tags = stmt
        .query_map([], |row| row.get(0))
        .context("Failed to query tags")?;

    tags.collect::<std::result::Result<Vec<_>, _>>()
        .context("Failed to collect tags")
}

fn insert_tags(conn: &Connection, catch_id: &str, tags: &[String]) -> Result<()> {
    for (position, tag) in tags.iter().enumerate() {
        conn.execute(
            "INSERT INTO catch_tags (catch_id, position, tag) VALUES (?1, ?2, ?3)",
            params![catch_id, position as i64, tag],
        )
        .context("Failed to insert catch tag")?;
    }
    Ok(())
}

fn get_catch_tags(conn: &Connection, catch_id: &str) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT tag FROM catch_tags WHERE catch_id = ? ORDER BY position ASC")
        .context("Failed to prepare get_catch_tags query")?;

    let tags = stmt
        .query_map(params![catch_id], |row| row.get(0))
        .context("Failed to query catch tags")?;

    tags.collect::<std::result::Result<Vec<_>, _>>()
        .context("Failed to collect catch tags")
}
