//! Derivation of the denormalized note view model.

use std::collections::HashMap;

use crate::types::{Note, RawNote, Tag};

/// Join raw notes to their full tag objects by id.
///
/// Pure function over both inputs. Tags are indexed once, then each note
/// resolves in O(|tag_ids|). Resolution preserves `tag_ids` order and
/// keeps one entry per occurrence, so duplicate ids yield duplicate tags.
/// Ids with no live tag drop out silently; a dangling reference is a
/// normal state between a tag deletion and the notes that still name it.
pub fn resolve_notes(notes: &[RawNote], tags: &[Tag]) -> Vec<Note> {
    let by_id: HashMap<&str, &Tag> = tags.iter().map(|t| (t.id.as_str(), t)).collect();

    notes
        .iter()
        .map(|note| Note {
            id: note.id.clone(),
            title: note.title.clone(),
            markdown: note.markdown.clone(),
            tags: note
                .tag_ids
                .iter()
                .filter_map(|id| by_id.get(id.as_str()).map(|&t| t.clone()))
                .collect(),
        })
        .collect()
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

    fn raw(id: &str, title: &str, tag_ids: &[&str]) -> RawNote {
        RawNote {
            id: id.to_string(),
            title: title.to_string(),
            markdown: "x".to_string(),
            tag_ids: tag_ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_resolves_in_tag_ids_order() {
        let tags = vec![tag("t1", "work"), tag("t2", "home"), tag("t3", "idea")];
        let notes = vec![raw("n1", "A", &["t3", "t1"])];

        let resolved = resolve_notes(&notes, &tags);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].tags, vec![tag("t3", "idea"), tag("t1", "work")]);
    }

    #[test]
    fn test_dangling_ids_are_dropped() {
        let tags = vec![tag("t1", "work")];
        let notes = vec![raw("n1", "A", &["t1", "t2"])];

        let resolved = resolve_notes(&notes, &tags);
        assert_eq!(resolved[0].tags, vec![tag("t1", "work")]);
    }

    #[test]
    fn test_duplicate_tag_ids_are_preserved() {
        let tags = vec![tag("t1", "work")];
        let notes = vec![raw("n1", "A", &["t1", "t1"])];

        let resolved = resolve_notes(&notes, &tags);
        assert_eq!(resolved[0].tags, vec![tag("t1", "work"), tag("t1", "work")]);
    }

    #[test]
    fn test_empty_inputs() {
        let tags = vec![tag("t1", "work")];
        assert!(resolve_notes(&[], &tags).is_empty());

        let notes = vec![raw("n1", "A", &["t1"]), raw("n2", "B", &[])];
        let resolved = resolve_notes(&notes, &[]);
        assert_eq!(resolved.len(), 2);
        assert!(resolved[0].tags.is_empty());
        assert!(resolved[1].tags.is_empty());
    }

    #[test]
    fn test_same_inputs_same_output() {
        let tags = vec![tag("t1", "work"), tag("t2", "home")];
        let notes = vec![raw("n1", "A", &["t1"]), raw("n2", "B", &["t2", "t1"])];

        assert_eq!(resolve_notes(&notes, &tags), resolve_notes(&notes, &tags));
    }

    #[test]
    fn test_note_fields_carried_over() {
        let notes = vec![raw("n1", "A", &[])];
        let resolved = resolve_notes(&notes, &[]);
        assert_eq!(resolved[0].id, "n1");
        assert_eq!(resolved[0].title, "A");
        assert_eq!(resolved[0].markdown, "x");
    }
}
