//! Media records and the metadata view the scorer consumes.

use serde::{Deserialize, Serialize};

/// Identifier of a stored media item
pub type MediaId = i64;

/// File type used for photographs
pub const IMAGE_FILE_TYPE: &str = "image";

fn default_file_type() -> String {
    IMAGE_FILE_TYPE.to_string()
}

/// An uploaded media item as stored by the persistence layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaRecord {
    /// Unique identifier
    pub id: MediaId,

    /// Stored filename
    pub filename: String,

    /// Filename as uploaded
    #[serde(default)]
    pub original_filename: Option<String>,

    /// Kind of media ("image", "audio", ...)
    #[serde(default = "default_file_type")]
    pub file_type: String,

    /// User-supplied title
    #[serde(default)]
    pub title: Option<String>,

    /// User-supplied description
    #[serde(default)]
    pub description: Option<String>,

    /// Year the photo was taken, if known
    #[serde(default, deserialize_with = "crate::models::year::lenient")]
    pub year: Option<i32>,
}

impl MediaRecord {
    /// Create an image record with only the filename set
    pub fn image(id: MediaId, filename: impl Into<String>) -> Self {
        Self {
            id,
            filename: filename.into(),
            original_filename: None,
            file_type: default_file_type(),
            title: None,
            description: None,
            year: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Set the original upload filename
    pub fn with_original_filename(mut self, name: impl Into<String>) -> Self {
        self.original_filename = Some(name.into());
        self
    }

    /// Set the file type
    pub fn with_file_type(mut self, file_type: impl Into<String>) -> Self {
        self.file_type = file_type.into();
        self
    }

    /// Whether this record is a photograph
    pub fn is_image(&self) -> bool {
        self.file_type == IMAGE_FILE_TYPE
    }

    /// Title for display: the title, else the original filename, else the stored filename
    pub fn display_title(&self) -> String {
        non_empty(&self.title)
            .or_else(|| non_empty(&self.original_filename))
            .unwrap_or(self.filename.as_str())
            .to_string()
    }

    /// The metadata the scorer reads
    pub fn metadata(&self) -> PhotoMetadata {
        PhotoMetadata {
            title: self.title.clone(),
            description: self.description.clone(),
            year: self.year,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Photo metadata consumed by the scorer. Binary content is never read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PhotoMetadata {
    /// Photo title
    pub title: Option<String>,

    /// Photo description
    pub description: Option<String>,

    /// Year the photo was taken
    #[serde(default, deserialize_with = "crate::models::year::lenient")]
    pub year: Option<i32>,
}

impl PhotoMetadata {
    /// Create metadata from its three fields
    pub fn new(title: Option<&str>, description: Option<&str>, year: Option<i32>) -> Self {
        Self {
            title: title.map(str::to_string),
            description: description.map(str::to_string),
            year,
        }
    }

    /// Lowercased title, empty when missing
    pub fn title_lower(&self) -> String {
        self.title.as_deref().unwrap_or_default().to_lowercase()
    }

    /// Lowercased "title description" text, trimmed
    pub fn searchable_text(&self) -> String {
        let description = self.description.as_deref().unwrap_or_default().to_lowercase();
        format!("{} {}", self.title_lower(), description)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_searchable_text_handles_missing_fields() {
        let metadata = PhotoMetadata::new(None, Some("Mother Carrycot grass"), Some(1960));
        assert_eq!(metadata.searchable_text(), "mother carrycot grass");

        let empty = PhotoMetadata::default();
        assert_eq!(empty.searchable_text(), "");
        assert_eq!(empty.title_lower(), "");
    }

    #[test]
    fn test_display_title_fallbacks() {
        let record = MediaRecord::image(1, "a1b2.jpg");
        assert_eq!(record.display_title(), "a1b2.jpg");

        let record = record.with_original_filename("beach.jpg");
        assert_eq!(record.display_title(), "beach.jpg");

        let record = record.with_title("  ");
        assert_eq!(record.display_title(), "beach.jpg");

        let record = record.with_title("Beach at Hastings");
        assert_eq!(record.display_title(), "Beach at Hastings");
    }

    #[test]
    fn test_file_type_defaults_to_image() {
        let record: MediaRecord =
            serde_json::from_str(r#"{"id": 2, "filename": "x.jpg", "year": "n/a"}"#).unwrap();
        assert!(record.is_image());
        assert_eq!(record.year, None);
        assert!(!MediaRecord::image(3, "a.mp3").with_file_type("audio").is_image());
    }
}
