//! Remote note store module.
//!
//! This module defines the client-side contract for the notes backend:
//! two list operations and six writes, mapping 1:1 to the REST routes.
//! [`HttpStore`] is the production implementation; tests substitute
//! their own.

pub mod http;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{NewTag, NoteWrite, RawNote, Tag};

pub use http::HttpStore;

/// Common interface to the notes backend.
///
/// Every operation is a single network round trip. No retries and no
/// per-operation timeout policy live at this layer; failures propagate
/// to the caller, which decides what stays in the cache.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetch all notes, tag relations by id only.
    async fn list_notes(&self) -> Result<Vec<RawNote>>;

    /// Fetch all tags.
    async fn list_tags(&self) -> Result<Vec<Tag>>;

    /// Create a note. The backend assigns the id.
    async fn create_note(&self, note: &NoteWrite) -> Result<()>;

    /// Replace the note named by `note.id`.
    async fn update_note(&self, note: &NoteWrite) -> Result<()>;

    /// Delete a note by id.
    async fn delete_note(&self, id: &str) -> Result<()>;

    /// Create a tag. The backend assigns the id.
    async fn create_tag(&self, tag: &NewTag) -> Result<()>;

    /// Replace the tag named by `tag.id`.
    async fn update_tag(&self, tag: &Tag) -> Result<()>;

    /// Delete a tag by id. Notes still referencing it keep the dangling
    /// id; resolution drops it at view-build time.
    async fn delete_tag(&self, id: &str) -> Result<()>;
}
