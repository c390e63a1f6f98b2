// Export and sharing
// Serializes the catch collection for download and formats share text

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::database::models::CatchRecord;

/// Pretty-printed JSON of the whole collection, the payload behind the
/// "Export Catches" button.
pub fn to_json(catches: &[CatchRecord]) -> Result<String> {
    serde_json::to_string_pretty(catches).context("Failed to serialize catches")
}

/// Write the JSON export to a file.
pub fn write_json(catches: &[CatchRecord], path: &Path) -> Result<()> {
    let json = to_json(catches)?;
    fs::write(path, json).with_context(|| format!("Failed to write export file {:?}", path))?;

    log::info!("Exported {} catches to {:?}", catches.len(), path);
    Ok(())
}

/// The share text for a single catch.
pub fn share_text(record: &CatchRecord) -> String {
    format!(
        "Check out my fishing catch!\nLocation: {}\nDescription: {}\nTags: {}",
        record.location,
        record.description,
        record.tags.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_record() -> CatchRecord {
        CatchRecord {
            id: "catch_abc123def456".to_string(),
            location: "Lake A".to_string(),
            description: "Big catch".to_string(),
            date: "2023-01-01T08:00:00+00:00".to_string(),
            tags: vec!["Bass".to_string(), "sunny".to_string()],
            latitude: Some(59.33),
            longitude: Some(18.07),
            image: None,
        }
    }

    #[test]
    fn test_json_export_round_trips() {
        let catches = vec![sample_record()];

        let json = to_json(&catches).unwrap();
        let parsed: Vec<CatchRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, catches);
    }

    #[test]
    fn test_write_json_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fishing_catches.json");

        write_json(&[sample_record()], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Lake A"));
        assert!(contents.contains("catch_abc123def456"));
    }

    #[test]
    fn test_share_text_format() {
        let text = share_text(&sample_record());
        assert_eq!(
            text,
            "Check out my fishing catch!\nLocation: Lake A\nDescription: Big catch\nTags: Bass, sunny"
        );
    }
}
