use std::io::Read;

use crate::display::{format_note_detail, format_note_line};
use crate::error::Result;
use crate::query::NoteFilter;
use crate::types::NoteData;
use crate::workspace::Workspace;

use super::resolve_or_create_tags;

/// List notes, optionally narrowed by title search and tag selection
pub async fn cmd_list(
    workspace: &Workspace,
    search: Option<&str>,
    tag_names: &[String],
    output_json: bool,
) -> Result<()> {
    let mut filter = NoteFilter {
        search: search.map(str::to_string),
        tag_ids: Vec::new(),
    };
    // Selected tags must already exist; listing never mutates.
    for name in tag_names {
        filter.tag_ids.push(workspace.resolve_tag(name).await?.id);
    }

    let notes = workspace.notes().await;
    let filtered = filter.filter(&notes);

    if output_json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    for note in filtered {
        println!("{}", format_note_line(note));
    }

    Ok(())
}

/// Display a single note in full
pub async fn cmd_show(workspace: &Workspace, id: &str, output_json: bool) -> Result<()> {
    let note = workspace.find_note(id).await?;

    if output_json {
        println!("{}", serde_json::to_string_pretty(&note)?);
        return Ok(());
    }

    println!("{}", format_note_detail(&note));
    Ok(())
}

/// Create a new note
pub async fn cmd_create(
    workspace: &Workspace,
    title: &str,
    markdown: Option<&str>,
    tag_names: &[String],
) -> Result<()> {
    let markdown = match markdown {
        Some(m) => m.to_string(),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let tags = resolve_or_create_tags(workspace, tag_names).await?;

    workspace
        .create_note(&NoteData {
            title: title.to_string(),
            markdown,
            tags,
        })
        .await?;

    println!("Created note '{title}'");
    Ok(())
}

/// Edit an existing note; unspecified fields keep their current values
pub async fn cmd_edit(
    workspace: &Workspace,
    id: &str,
    title: Option<&str>,
    markdown: Option<&str>,
    tag_names: Option<&[String]>,
) -> Result<()> {
    let note = workspace.find_note(id).await?;

    let tags = match tag_names {
        Some(names) => resolve_or_create_tags(workspace, names).await?,
        None => note.tags.clone(),
    };

    let data = NoteData {
        title: title.unwrap_or(&note.title).to_string(),
        markdown: markdown.unwrap_or(&note.markdown).to_string(),
        tags,
    };

    workspace.update_note(&note.id, &data).await?;

    println!("Updated note {}", note.id);
    Ok(())
}

/// Delete a note
pub async fn cmd_delete(workspace: &Workspace, id: &str) -> Result<()> {
    let note = workspace.find_note(id).await?;
    workspace.delete_note(&note.id).await?;

    println!("Deleted note {}", note.id);
    Ok(())
}
