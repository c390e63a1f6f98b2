// Database models - Catch records and drafts
use anyhow::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged fishing catch.
///
/// Immutable once stored; an edit replaces the whole record under the same
/// id. The image is an opaque reference (data URI or URL) and is never
/// interpreted here. Coordinates are absent until the catch is geotagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchRecord {
    pub id: String,
    pub location: String,
    pub description: String,
    pub date: String,
    pub tags: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image: Option<String>,
}

impl CatchRecord {
    /// Build a record stamped with a fresh id and the current UTC time.
    pub fn new(location: String, description: String, tags: Vec<String>) -> Self {
        Self {
            id: generate_id(),
            location,
            description,
            date: chrono::Utc::now().to_rfc3339(),
            tags,
            latitude: None,
            longitude: None,
            image: None,
        }
    }
}

fn generate_id() -> String {
    format!(
        "catch_{}",
        Uuid::new_v4().to_string().replace("-", "")[..12].to_string()
    )
}

/// A validation failure for a single draft field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Form-shaped input for a new catch, validated before it becomes a record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatchDraft {
    pub location: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

const MAX_LOCATION_LEN: usize = 200;
const MAX_DESCRIPTION_LEN: usize = 2000;

impl CatchDraft {
    /// Check the draft against the form rules. An empty result means valid.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.location.trim().is_empty() {
            errors.push(FieldError {
                field: "location",
                message: "location is required".to_string(),
            });
        } else if self.location.chars().count() > MAX_LOCATION_LEN {
            errors.push(FieldError {
                field: "location",
                message: format!("location must not exceed {} characters", MAX_LOCATION_LEN),
            });
        }

        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            errors.push(FieldError {
                field: "description",
                message: format!(
                    "description must not exceed {} characters",
                    MAX_DESCRIPTION_LEN
                ),
            });
        }

        errors
    }

    /// Validate and turn the draft into a record with a fresh id and the
    /// current UTC timestamp.
    pub fn into_record(self) -> Result<CatchRecord> {
        let errors = self.validate();
        if !errors.is_empty() {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            return Err(anyhow::anyhow!("Invalid catch: {}", messages.join("; ")));
        }

        let mut record = CatchRecord::new(self.location, self.description, self.tags);
        record.image = self.image;
        record.latitude = self.latitude;
        record.longitude = self.longitude;
        Ok(record)
    }
}

/// Split comma-separated tag input into trimmed, non-empty labels.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}
