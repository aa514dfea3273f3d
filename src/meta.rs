//! Models for the chapter-metadata document and inline passage metadata.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Decoded contents of a passage's inline metadata block.
///
/// Every field has a declared default; a metadata block may override any
/// subset of them (JSON-merge-patch over the defaults). Unknown keys in the
/// block are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PassageMetadata {
    pub is_income: bool,
    pub is_secondary_personage: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub time: String,
    pub from_name: String,
}

impl Default for PassageMetadata {
    fn default() -> Self {
        PassageMetadata {
            is_income: false,
            is_secondary_personage: false,
            kind: "text".to_string(),
            time: String::new(),
            from_name: String::new(),
        }
    }
}

/// One chapter's entry in the metadata document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterDescriptor {
    pub name: String,
    #[serde(default)]
    pub store_product_id: String,
}

/// The side metadata document: chapter descriptors in declared order, the
/// one-based indices of free chapters, and any further top-level fields,
/// which pass through to the output document unchanged.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryMeta {
    pub chapters: Vec<ChapterDescriptor>,
    pub free_chapters_number: Vec<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StoryMeta {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_declared_record() {
        let meta = PassageMetadata::default();
        assert!(!meta.is_income);
        assert!(!meta.is_secondary_personage);
        assert_eq!(meta.kind, "text");
        assert_eq!(meta.time, "");
        assert_eq!(meta.from_name, "");
    }

    #[test]
    fn extra_top_level_fields_are_captured_for_passthrough() {
        let meta = StoryMeta::from_json(
            r#"{
                "chapters": [{"name": "Ch1", "storeProductId": "sku.1"}, {"name": "Ch2"}],
                "freeChaptersNumber": [1],
                "author": "N. N.",
                "coverUrl": "cover.png"
            }"#,
        )
        .unwrap();

        assert_eq!(meta.chapters.len(), 2);
        assert_eq!(meta.chapters[0].store_product_id, "sku.1");
        assert_eq!(meta.chapters[1].store_product_id, "");
        assert_eq!(meta.free_chapters_number, vec![1]);
        assert_eq!(meta.extra["author"], "N. N.");
        assert_eq!(meta.extra["coverUrl"], "cover.png");
        assert!(!meta.extra.contains_key("chapters"));
        assert!(!meta.extra.contains_key("freeChaptersNumber"));
    }

    #[test]
    fn missing_chapter_list_is_a_decode_error() {
        assert!(StoryMeta::from_json(r#"{"freeChaptersNumber": []}"#).is_err());
    }
}
