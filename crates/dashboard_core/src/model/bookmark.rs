//! Bookmark record.

use super::record::{
    new_record_id, now_epoch_ms, require_text, Record, RecordId, RecordValidationError,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: RecordId,
    pub title: String,
    pub url: String,
    /// Ordered as entered; may be empty.
    pub tags: Vec<String>,
    pub note: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Bookmark {
    /// Creates a bookmark with a fresh id and creation timestamp.
    ///
    /// `title` and `url` are required.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        tags: Vec<String>,
        note: impl Into<String>,
    ) -> Result<Self, RecordValidationError> {
        let title = title.into();
        let url = url.into();
        require_text("title", &title)?;
        require_text("url", &url)?;
        Ok(Self {
            id: new_record_id(),
            title,
            url,
            tags,
            note: note.into(),
            created_at: now_epoch_ms(),
        })
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}

impl Record for Bookmark {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Parses comma separated tag input: split, trim, drop empty entries.
pub fn parse_tag_input(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_tag_input, Bookmark};
    use crate::model::record::RecordValidationError;

    #[test]
    fn tag_input_is_trimmed_and_empty_entries_dropped() {
        assert_eq!(
            parse_tag_input(" rust, ,tools ,, "),
            vec!["rust".to_string(), "tools".to_string()]
        );
        assert!(parse_tag_input("").is_empty());
    }

    #[test]
    fn title_and_url_are_required() {
        let err = Bookmark::new("", "https://example.com", Vec::new(), "").unwrap_err();
        assert_eq!(err, RecordValidationError::BlankField("title"));
        let err = Bookmark::new("Docs", "  ", Vec::new(), "").unwrap_err();
        assert_eq!(err, RecordValidationError::BlankField("url"));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = r#"{"id":"1700000000000","title":"Rust","url":"https://rust-lang.org","tags":["lang"],"note":"","createdAt":1700000000000}"#;
        let bookmark: Bookmark = serde_json::from_str(json).unwrap();
        assert_eq!(bookmark.id, "1700000000000");
        assert_eq!(bookmark.created_at, 1_700_000_000_000);
        assert_eq!(serde_json::to_string(&bookmark).unwrap(), json);
    }
}
