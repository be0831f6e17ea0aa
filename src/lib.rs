pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod query;
pub mod remote;
pub mod types;
pub mod view;
pub mod workspace;

pub use config::Config;
pub use error::{JotterError, Result};
pub use query::NoteFilter;
pub use remote::{HttpStore, RemoteStore};
pub use types::{NewTag, Note, NoteData, NoteWrite, RawNote, Tag};
pub use view::resolve_notes;
pub use workspace::Workspace;
