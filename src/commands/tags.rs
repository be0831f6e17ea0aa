use crate::display::format_tag_line;
use crate::error::Result;
use crate::types::NewTag;
use crate::workspace::Workspace;

/// List all tags
pub async fn cmd_tags_list(workspace: &Workspace, output_json: bool) -> Result<()> {
    let tags = workspace.tags().await;

    if output_json {
        println!("{}", serde_json::to_string_pretty(&*tags)?);
        return Ok(());
    }

    for tag in tags.iter() {
        println!("{}", format_tag_line(tag));
    }

    Ok(())
}

/// Create a new tag
pub async fn cmd_tag_add(workspace: &Workspace, label: &str) -> Result<()> {
    workspace
        .add_tag(&NewTag {
            label: label.to_string(),
        })
        .await?;

    println!("Created tag '{label}'");
    Ok(())
}

/// Rename a tag; notes referencing it pick up the new label
pub async fn cmd_tag_rename(workspace: &Workspace, tag: &str, label: &str) -> Result<()> {
    let tag = workspace.resolve_tag(tag).await?;
    workspace.update_tag(&tag.id, label).await?;

    println!("Renamed tag '{}' to '{label}'", tag.label);
    Ok(())
}

/// Delete a tag; notes keep the dangling id, which no longer resolves
pub async fn cmd_tag_remove(workspace: &Workspace, tag: &str) -> Result<()> {
    let tag = workspace.resolve_tag(tag).await?;
    workspace.delete_tag(&tag.id).await?;

    println!("Deleted tag '{}'", tag.label);
    Ok(())
}
