//! Filtering of the note view model for list display.

use crate::types::Note;

/// Case-insensitive substring match.
///
/// Uses `unicase` for correct Unicode case folding (handles Turkish i,
/// German ß, etc.). Folding allocates for both sides; list sizes here
/// make that a non-issue.
fn contains_case_insensitive(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack_folded = unicase::UniCase::new(haystack).to_folded_case();
    let needle_folded = unicase::UniCase::new(needle).to_folded_case();
    haystack_folded.contains(&needle_folded)
}

/// Criteria for narrowing the note list.
///
/// Mirrors the list view's controls: a free-text title search and a set
/// of selected tags. An empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    /// Substring to search for in titles, case-insensitive.
    pub search: Option<String>,
    /// Tag ids that must all be present on a matching note.
    pub tag_ids: Vec<String>,
}

impl NoteFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.tag_ids.is_empty()
    }

    /// Check whether a note satisfies every criterion.
    pub fn matches(&self, note: &Note) -> bool {
        if let Some(search) = &self.search
            && !contains_case_insensitive(&note.title, search)
        {
            return false;
        }

        self.tag_ids
            .iter()
            .all(|id| note.tags.iter().any(|tag| &tag.id == id))
    }

    /// Apply the filter to a note list, preserving order.
    pub fn filter<'a>(&self, notes: &'a [Note]) -> Vec<&'a Note> {
        notes.iter().filter(|n| self.matches(n)).collect()
    }
}
