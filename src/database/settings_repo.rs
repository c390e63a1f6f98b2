// Settings repository for catchlog
// Handles the key-value store backing UI preferences

use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::models::{Preferences, Setting};
use super::CatchStore;

const KEY_THEME: &str = "theme";
const KEY_PAGE_SIZE: &str = "page_size";
const KEY_DEFAULT_VIEW: &str = "default_view";

impl CatchStore {
    /// Get a single setting by key
    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        self.with_connection(|conn| get_setting_impl(conn, key))
    }

    /// Set a single setting
    pub fn set_setting(&self, key: &str, value: &str, value_type: &str) -> Result<()> {
        self.with_connection(|conn| set_setting_impl(conn, key, value, value_type))
    }

    /// Delete a setting by key
    pub fn delete_setting(&self, key: &str) -> Result<()> {
        self.with_connection(|conn| delete_setting_impl(conn, key))
    }

    /// Get all settings
    pub fn list_settings(&self) -> Result<Vec<Setting>> {
        self.with_connection(list_settings_impl)
    }

    /// Load the UI preferences, falling back to defaults for anything unset
    pub fn load_preferences(&self) -> Result<Preferences> {
        let mut prefs = Preferences::default();

        if let Some(theme) = self.get_setting(KEY_THEME)? {
            prefs.theme = theme;
        }
        if let Some(view) = self.get_setting(KEY_DEFAULT_VIEW)? {
            prefs.default_view = view;
        }
        if let Some(raw) = self.get_setting(KEY_PAGE_SIZE)? {
            match raw.parse::<usize>() {
                Ok(size) if size > 0 => prefs.page_size = size,
                _ => log::warn!("Ignoring invalid page_size setting: {}", raw),
            }
        }

        Ok(prefs)
    }

    /// Persist the UI preferences
    pub fn save_preferences(&self, prefs: &Preferences) -> Result<()> {
        self.set_setting(KEY_THEME, &prefs.theme, "string")?;
        self.set_setting(KEY_PAGE_SIZE, &prefs.page_size.to_string(), "number")?;
        self.set_setting(KEY_DEFAULT_VIEW, &prefs.default_view, "string")?;
        Ok(())
    }
}

fn get_setting_impl(conn: &Connection, key: &str) -> Result<Option<String>> {
    let mut stmt = conn
        .prepare("SELECT value FROM settings WHERE key = ?")
        .context("Failed to prepare get_setting query")?;

    let result = stmt.query_row(params![key], |row| row.get(0));

    match result {
        Ok(value) => Ok(Some(value)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e).context("Failed to get setting"),
    }
}

fn set_setting_impl(conn: &Connection, key: &str, value: &str, value_type: &str) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO settings (key, value, value_type, updated_at)
        VALUES (?1, ?2, ?3, datetime('now'))
        ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            value_type = excluded.value_type,
            updated_at = datetime('now')
        "#,
        params![key, value, value_type],
    )
    .context("Failed to set setting")?;

    Ok(())
}

fn delete_setting_impl(conn: &Connection, key: &str) -> Result<()> {
    conn.execute("DELETE FROM settings WHERE key = ?", params![key])
        .context("Failed to delete setting")?;
    Ok(())
}

fn list_settings_impl(conn: &Connection) -> Result<Vec<Setting>> {
    let mut stmt = conn
        .prepare("SELECT key, value, value_type, updated_at FROM settings ORDER BY key ASC")
        .context("Failed to prepare list_settings query")?;

    let settings = stmt
        .query_map([], |row| {
            Ok(Setting {
                key: row.get(0)?,
                value: row.get(1)?,
                value_type: row.get(2)?,
                updated_at: row.get(3)?,
            })
        })
        .context("Failed to query settings")?;

    settings
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("Failed to collect settings")
}
