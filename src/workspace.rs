//! The client-side state container: raw cache, refresh orchestration,
//! and the mutation commands.
//!
//! A [`Workspace`] owns the last-fetched raw notes and tags and the
//! handle to the remote store. All state lives here and is reached
//! through the owner; nothing is ambient. Reads hand out the derived
//! view model; every write goes to the backend first and then refetches
//! both collections wholesale. There is no partial-update path and no
//! optimistic merge.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::error::{JotterError, Result};
use crate::remote::RemoteStore;
use crate::types::{NewTag, Note, NoteData, NoteWrite, RawNote, Tag};
use crate::view::resolve_notes;

/// The two cache slots plus the memoized view derivation.
///
/// Each slot is stamped with the generation of the refresh that filled
/// it, so an older in-flight refresh can never clobber a newer one.
#[derive(Default)]
struct CacheState {
    notes: Arc<Vec<RawNote>>,
    tags: Arc<Vec<Tag>>,
    notes_gen: u64,
    tags_gen: u64,
    view: Option<ViewCache>,
}

/// Derived view model, valid for exactly one (notes_gen, tags_gen) pair.
struct ViewCache {
    notes_gen: u64,
    tags_gen: u64,
    notes: Arc<Vec<Note>>,
}

/// Client-side coordinator for one user's notes and tags.
pub struct Workspace {
    store: Arc<dyn RemoteStore>,
    state: RwLock<CacheState>,
    refresh_gen: AtomicU64,
}

impl Workspace {
    /// Create an empty workspace over the given store. The cache starts
    /// empty; call [`Workspace::refresh`] to populate it.
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            store,
            state: RwLock::new(CacheState::default()),
            refresh_gen: AtomicU64::new(0),
        }
    }

    /// Refetch both collections and replace the cache wholesale.
    ///
    /// The two list fetches run concurrently and each replaces its slot
    /// as it arrives, so notes and tags may land in either order and the
    /// view stays derivable throughout. A fetch that fails leaves its
    /// slot untouched; the first error is returned once both settle.
    pub async fn refresh(&self) -> Result<()> {
        let generation = self.refresh_gen.fetch_add(1, Ordering::SeqCst) + 1;

        let notes_fut = async {
            let notes = self.store.list_notes().await?;
            let mut state = self.state.write().await;
            if generation >= state.notes_gen {
                state.notes = Arc::new(notes);
                state.notes_gen = generation;
            } else {
                tracing::warn!(
                    generation,
                    current = state.notes_gen,
                    "discarding stale notes fetch"
                );
            }
            Ok(())
        };

        let tags_fut = async {
            let tags = self.store.list_tags().await?;
            let mut state = self.state.write().await;
            if generation >= state.tags_gen {
                state.tags = Arc::new(tags);
                state.tags_gen = generation;
            } else {
                tracing::warn!(
                    generation,
                    current = state.tags_gen,
                    "discarding stale tags fetch"
                );
            }
            Ok(())
        };

        let (notes_result, tags_result): (Result<()>, Result<()>) =
            tokio::join!(notes_fut, tags_fut);
        notes_result.and(tags_result)
    }

    /// The derived view model: every cached note with its tag relations
    /// resolved to full tag objects.
    ///
    /// Re-derived only when either slot has been replaced since the last
    /// call; otherwise the memoized result is returned.
    pub async fn notes(&self) -> Arc<Vec<Note>> {
        {
            let state = self.state.read().await;
            if let Some(view) = &state.view
                && view.notes_gen == state.notes_gen
                && view.tags_gen == state.tags_gen
            {
                return Arc::clone(&view.notes);
            }
        }

        let mut state = self.state.write().await;
        // Another task may have derived it while we waited for the lock.
        if let Some(view) = &state.view
            && view.notes_gen == state.notes_gen
            && view.tags_gen == state.tags_gen
        {
            return Arc::clone(&view.notes);
        }

        let notes = Arc::new(resolve_notes(&state.notes, &state.tags));
        state.view = Some(ViewCache {
            notes_gen: state.notes_gen,
            tags_gen: state.tags_gen,
            notes: Arc::clone(&notes),
        });
        notes
    }

    /// The cached tags, as fetched.
    pub async fn tags(&self) -> Arc<Vec<Tag>> {
        Arc::clone(&self.state.read().await.tags)
    }

    /// Create a note, then resynchronize.
    pub async fn create_note(&self, data: &NoteData) -> Result<()> {
        self.store.create_note(&NoteWrite::create(data)).await?;
        self.refresh().await
    }

    /// Replace the note with the given id, then resynchronize.
    pub async fn update_note(&self, id: &str, data: &NoteData) -> Result<()> {
        self.store.update_note(&NoteWrite::update(id, data)).await?;
        self.refresh().await
    }

    /// Delete a note, then resynchronize.
    pub async fn delete_note(&self, id: &str) -> Result<()> {
        self.store.delete_note(id).await?;
        self.refresh().await
    }

    /// Create a tag, then resynchronize.
    pub async fn add_tag(&self, tag: &NewTag) -> Result<()> {
        self.store.create_tag(tag).await?;
        self.refresh().await
    }

    /// Rename a tag. Identity is the id; every note referencing it picks
    /// up the new label on the next view derivation.
    pub async fn update_tag(&self, id: &str, label: &str) -> Result<()> {
        let tag = Tag {
            id: id.to_string(),
            label: label.to_string(),
        };
        self.store.update_tag(&tag).await?;
        self.refresh().await
    }

    /// Delete a tag, then resynchronize. Notes that still reference the
    /// id keep it; the dangling reference drops out of the view model.
    pub async fn delete_tag(&self, id: &str) -> Result<()> {
        self.store.delete_tag(id).await?;
        self.refresh().await
    }

    /// Find a cached note by exact id, falling back to unique-prefix
    /// match.
    pub async fn find_note(&self, partial_id: &str) -> Result<Note> {
        let notes = self.notes().await;

        if let Some(note) = notes.iter().find(|n| n.id == partial_id) {
            return Ok(note.clone());
        }

        let matches: Vec<&Note> = notes
            .iter()
            .filter(|n| n.id.starts_with(partial_id))
            .collect();
        match matches.len() {
            0 => Err(JotterError::NoteNotFound(partial_id.to_string())),
            1 => Ok(matches[0].clone()),
            _ => Err(JotterError::AmbiguousId(
                partial_id.to_string(),
                matches.iter().map(|n| n.id.clone()).collect(),
            )),
        }
    }

    /// Resolve a cached tag by exact id or case-insensitive label.
    pub async fn resolve_tag(&self, name: &str) -> Result<Tag> {
        let tags = self.tags().await;

        if let Some(tag) = tags.iter().find(|t| t.id == name) {
            return Ok(tag.clone());
        }

        tags.iter()
            .find(|t| unicase::eq(t.label.as_str(), name))
            .cloned()
            .ok_or_else(|| JotterError::TagNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Fixed-response store for resolution tests.
    struct FixedStore {
        notes: Vec<RawNote>,
        tags: Vec<Tag>,
    }

    #[async_trait]
    impl RemoteStore for FixedStore {
        async fn list_notes(&self) -> Result<Vec<RawNote>> {
            Ok(self.notes.clone())
        }
        async fn list_tags(&self) -> Result<Vec<Tag>> {
            Ok(self.tags.clone())
        }
        async fn create_note(&self, _note: &NoteWrite) -> Result<()> {
            Ok(())
        }
        async fn update_note(&self, _note: &NoteWrite) -> Result<()> {
            Ok(())
        }
        async fn delete_note(&self, _id: &str) -> Result<()> {
            Ok(())
        }
        async fn create_tag(&self, _tag: &NewTag) -> Result<()> {
            Ok(())
        }
        async fn update_tag(&self, _tag: &Tag) -> Result<()> {
            Ok(())
        }
        async fn delete_tag(&self, _id: &str) -> Result<()> {
            Ok(())
        }
    }

    fn raw(id: &str, title: &str) -> RawNote {
        RawNote {
            id: id.to_string(),
            title: title.to_string(),
            markdown: String::new(),
            tag_ids: vec![],
        }
    }

    fn tag(id: &str, label: &str) -> Tag {
        Tag {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    fn workspace(notes: Vec<RawNote>, tags: Vec<Tag>) -> Workspace {
        Workspace::new(Arc::new(FixedStore { notes, tags }))
    }

    #[tokio::test]
    async fn test_find_note_exact_beats_prefix() {
        let ws = workspace(vec![raw("n1", "A"), raw("n12", "B")], vec![]);
        ws.refresh().await.unwrap();

        assert_eq!(ws.find_note("n1").await.unwrap().id, "n1");
        assert_eq!(ws.find_note("n12").await.unwrap().id, "n12");
    }

    #[tokio::test]
    async fn test_find_note_unique_prefix() {
        let ws = workspace(vec![raw("abc123", "A"), raw("xyz789", "B")], vec![]);
        ws.refresh().await.unwrap();

        assert_eq!(ws.find_note("abc").await.unwrap().id, "abc123");
    }

    #[tokio::test]
    async fn test_find_note_ambiguous_and_missing() {
        let ws = workspace(vec![raw("ab1", "A"), raw("ab2", "B")], vec![]);
        ws.refresh().await.unwrap();

        assert!(matches!(
            ws.find_note("ab").await,
            Err(JotterError::AmbiguousId(_, _))
        ));
        assert!(matches!(
            ws.find_note("zz").await,
            Err(JotterError::NoteNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_resolve_tag_by_id_and_label() {
        let ws = workspace(vec![], vec![tag("t1", "Work"), tag("t2", "Home")]);
        ws.refresh().await.unwrap();

        assert_eq!(ws.resolve_tag("t2").await.unwrap().label, "Home");
        assert_eq!(ws.resolve_tag("work").await.unwrap().id, "t1");
        assert!(matches!(
            ws.resolve_tag("errands").await,
            Err(JotterError::TagNotFound(_))
        ));
    }
}
