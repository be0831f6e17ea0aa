//! Domain and wire types for notes and tags.
//!
//! The backend speaks camelCase JSON (`tagIds`); everything that crosses
//! the wire carries serde renames so field names here stay idiomatic.

use serde::{Deserialize, Serialize};

/// A tag as the backend stores it.
///
/// Identity is the `id`; the `label` may be renamed without the tag
/// changing identity. Notes reference tags by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub label: String,
}

/// A note as the backend stores it: tag relations by id only.
///
/// `tag_ids` is kept verbatim: duplicates are not collapsed, and ids
/// pointing at deleted tags are legal. Resolution happens at view-build
/// time, where unresolvable ids drop out silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNote {
    pub id: String,
    pub title: String,
    pub markdown: String,
    pub tag_ids: Vec<String>,
}

/// A note with its tag relations resolved to full [`Tag`] objects.
///
/// Derived, never persisted, never sent back to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub markdown: String,
    pub tags: Vec<Tag>,
}

/// Input shape for creating or editing a note.
///
/// Carries full `Tag` objects so callers work against the view model;
/// the write path reduces them back to ids (see [`NoteWrite`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteData {
    pub title: String,
    pub markdown: String,
    pub tags: Vec<Tag>,
}

impl NoteData {
    /// Extract the tag ids in tag order, duplicates included.
    pub fn tag_ids(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.id.clone()).collect()
    }
}

/// Input shape for creating a tag. The backend assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTag {
    pub label: String,
}

/// Wire payload for note writes.
///
/// Create and update send the same shape: `{title, markdown, tagIds}`,
/// with `id` present only on update. Tag relations always travel as ids,
/// never as embedded tag objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub markdown: String,
    pub tag_ids: Vec<String>,
}

impl NoteWrite {
    /// Payload for creating a note. The backend assigns the id.
    pub fn create(data: &NoteData) -> Self {
        Self {
            id: None,
            title: data.title.clone(),
            markdown: data.markdown.clone(),
            tag_ids: data.tag_ids(),
        }
    }

    /// Payload for replacing the note with the given id.
    pub fn update(id: &str, data: &NoteData) -> Self {
        Self {
            id: Some(id.to_string()),
            title: data.title.clone(),
            markdown: data.markdown.clone(),
            tag_ids: data.tag_ids(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(id: &str, label: &str) -> Tag {
        Tag {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_raw_note_wire_names() {
        let json = r#"{"id":"n1","title":"A","markdown":"x","tagIds":["t1","t1","t2"]}"#;
        let note: RawNote = serde_json::from_str(json).unwrap();
        assert_eq!(note.tag_ids, vec!["t1", "t1", "t2"]);

        let out = serde_json::to_value(&note).unwrap();
        assert!(out.get("tagIds").is_some());
        assert!(out.get("tag_ids").is_none());
    }

    #[test]
    fn test_note_write_create_omits_id() {
        let data = NoteData {
            title: "A".to_string(),
            markdown: "x".to_string(),
            tags: vec![tag("t1", "work")],
        };
        let out = serde_json::to_value(NoteWrite::create(&data)).unwrap();
        assert!(out.get("id").is_none());
        assert_eq!(out["tagIds"], serde_json::json!(["t1"]));
        assert_eq!(out["title"], "A");
    }

    #[test]
    fn test_note_write_update_carries_id_and_tag_ids() {
        let data = NoteData {
            title: "B".to_string(),
            markdown: "y".to_string(),
            tags: vec![tag("t1", "work"), tag("t3", "home")],
        };
        let out = serde_json::to_value(NoteWrite::update("n1", &data)).unwrap();
        assert_eq!(out["id"], "n1");
        assert_eq!(out["tagIds"], serde_json::json!(["t1", "t3"]));
    }

    #[test]
    fn test_note_data_tag_ids_preserves_duplicates() {
        let data = NoteData {
            title: "A".to_string(),
            markdown: "x".to_string(),
            tags: vec![tag("t1", "work"), tag("t1", "work")],
        };
        assert_eq!(data.tag_ids(), vec!["t1", "t1"]);
    }
}
