/// Shared data structures for the application state
///
/// These structs mirror the static projects document (`projects.json`)
/// and flow from the catalog loader into the view layer.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

/// A single portfolio project
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// URL-safe unique identifier (e.g., "oak-coffee-table")
    pub slug: String,
    /// Display title
    pub title: String,
    /// When the piece was finished
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    /// Tags in display order; may repeat across records
    #[serde(default)]
    pub tags: Vec<String>,
    /// Trusted description text, shown verbatim
    #[serde(default)]
    pub description: String,
    /// Filename of the hero / card image
    pub main_image: String,
    /// Filenames of the gallery images, in display order
    #[serde(default)]
    pub gallery: Vec<String>,
}

/// The whole projects document
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Prefix for every image reference
    pub image_base_url: String,
    /// Projects in their stable display order
    pub projects: Vec<ProjectRecord>,
}

/// Parse the ISO-8601 flavours the projects document uses.
///
/// Accepts `2024-08-15`, `2024-08` and full RFC 3339 timestamps.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid project date: {:?}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_date_variants() {
        let aug = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap();
        assert_eq!(parse_date("2024-08-15"), Some(aug));
        assert_eq!(parse_date("2024-08-15T10:30:00Z"), Some(aug));
        assert_eq!(parse_date("2024-08"), NaiveDate::from_ymd_opt(2024, 8, 1));
        assert_eq!(parse_date("last summer"), None);
    }

    #[test]
    fn test_record_from_json() {
        let json = r#"{
            "slug": "oak-coffee-table",
            "title": "Oak Coffee Table",
            "date": "2024-08-01",
            "tags": ["furniture", "oak"],
            "description": "Solid <em>oak</em>.",
            "mainImage": "main.jpg",
            "gallery": ["1.jpg", "2.jpg"]
        }"#;

        let record: ProjectRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.slug, "oak-coffee-table");
        assert_eq!(record.main_image, "main.jpg");
        assert_eq!(record.tags, vec!["furniture", "oak"]);
        assert_eq!(record.gallery.len(), 2);
        assert_eq!(record.description, "Solid <em>oak</em>.");
    }

    #[test]
    fn test_missing_gallery_is_empty() {
        let json = r#"{
            "slug": "stool",
            "title": "Stool",
            "date": "2023-01-10",
            "tags": [],
            "description": "",
            "mainImage": "stool.jpg"
        }"#;

        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert!(record.gallery.is_empty());
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let json = r#"{
            "slug": "stool",
            "title": "Stool",
            "date": "someday",
            "tags": [],
            "description": "",
            "mainImage": "stool.jpg"
        }"#;

        assert!(serde_json::from_str::<ProjectRecord>(json).is_err());
    }
}
