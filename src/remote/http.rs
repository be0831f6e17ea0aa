//! HTTP implementation of the remote note store using reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::Config;
use crate::error::{JotterError, Result};
use crate::types::{NewTag, NoteWrite, RawNote, Tag};

use super::RemoteStore;

const NOTES_PATH: &str = "notes";
const TAGS_PATH: &str = "tags";

/// Remote store backed by the REST API.
pub struct HttpStore {
    client: Client,
    base_url: Url,
}

impl HttpStore {
    /// Create a store against the configured backend.
    ///
    /// Configures the HTTP client with a 10s connect timeout and 30s
    /// total timeout. These are transport settings on the shared client;
    /// individual operations carry no retry or timeout logic of their own.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(&config.server_url())
    }

    /// Create a store against an explicit base URL.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url)
            .map_err(|e| JotterError::Config(format!("invalid server URL '{base_url}': {e}")))?;
        if url.cannot_be_a_base() {
            return Err(JotterError::Config(format!(
                "invalid server URL '{base_url}': cannot be a base"
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: url,
        })
    }

    /// Build a request URL from path segments.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .expect("base URL validated at construction")
            .pop_if_empty()
            .extend(segments);
        url
    }

    /// Turn a non-success response into an `Api` error carrying the
    /// status and whatever body the server sent.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.text().await {
            Ok(body) if !body.is_empty() => body,
            _ => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };

        Err(JotterError::Api { status, message })
    }
}

#[async_trait]
impl RemoteStore for HttpStore {
    async fn list_notes(&self) -> Result<Vec<RawNote>> {
        let url = self.endpoint(&[NOTES_PATH]);
        tracing::debug!(%url, "listing notes");
        let response = self.client.get(url).send().await?;
        let notes = Self::ensure_success(response).await?.json().await?;
        Ok(notes)
    }

    async fn list_tags(&self) -> Result<Vec<Tag>> {
        let url = self.endpoint(&[TAGS_PATH]);
        tracing::debug!(%url, "listing tags");
        let response = self.client.get(url).send().await?;
        let tags = Self::ensure_success(response).await?.json().await?;
        Ok(tags)
    }

    async fn create_note(&self, note: &NoteWrite) -> Result<()> {
        let url = self.endpoint(&[NOTES_PATH]);
        tracing::debug!(%url, title = %note.title, "creating note");
        let response = self.client.post(url).json(note).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn update_note(&self, note: &NoteWrite) -> Result<()> {
        let url = self.endpoint(&[NOTES_PATH]);
        tracing::debug!(%url, id = ?note.id, "updating note");
        let response = self.client.put(url).json(note).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn delete_note(&self, id: &str) -> Result<()> {
        let url = self.endpoint(&[NOTES_PATH, id]);
        tracing::debug!(%url, "deleting note");
        let response = self.client.delete(url).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn create_tag(&self, tag: &NewTag) -> Result<()> {
        let url = self.endpoint(&[TAGS_PATH]);
        tracing::debug!(%url, label = %tag.label, "creating tag");
        let response = self.client.post(url).json(tag).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn update_tag(&self, tag: &Tag) -> Result<()> {
        let url = self.endpoint(&[TAGS_PATH]);
        tracing::debug!(%url, id = %tag.id, "updating tag");
        let response = self.client.put(url).json(tag).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn delete_tag(&self, id: &str) -> Result<()> {
        let url = self.endpoint(&[TAGS_PATH, id]);
        tracing::debug!(%url, "deleting tag");
        let response = self.client.delete(url).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_segments() {
        let store = HttpStore::with_base_url("http://localhost:3000").unwrap();
        assert_eq!(
            store.endpoint(&["notes"]).as_str(),
            "http://localhost:3000/notes"
        );
        assert_eq!(
            store.endpoint(&["notes", "n1"]).as_str(),
            "http://localhost:3000/notes/n1"
        );
    }

    #[test]
    fn test_endpoint_with_base_path() {
        let store = HttpStore::with_base_url("http://localhost:3000/api/").unwrap();
        assert_eq!(
            store.endpoint(&["tags", "t1"]).as_str(),
            "http://localhost:3000/api/tags/t1"
        );
    }

    #[test]
    fn test_endpoint_escapes_segment() {
        let store = HttpStore::with_base_url("http://localhost:3000").unwrap();
        assert_eq!(
            store.endpoint(&["notes", "a b"]).as_str(),
            "http://localhost:3000/notes/a%20b"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(HttpStore::with_base_url("not a url").is_err());
        assert!(HttpStore::with_base_url("data:text/plain,hi").is_err());
    }
}
