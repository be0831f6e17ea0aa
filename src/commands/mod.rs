mod notes;
mod tags;

pub use notes::{cmd_create, cmd_delete, cmd_edit, cmd_list, cmd_show};
pub use tags::{cmd_tag_add, cmd_tag_remove, cmd_tag_rename, cmd_tags_list};

use crate::error::{JotterError, Result};
use crate::types::{NewTag, Tag};
use crate::workspace::Workspace;

/// Resolve each tag name against the cache, creating missing ones.
///
/// Names resolve by id or label; a name with no match becomes a new tag
/// on the backend and is resolved again from the refreshed cache.
pub(crate) async fn resolve_or_create_tags(
    workspace: &Workspace,
    names: &[String],
) -> Result<Vec<Tag>> {
    let mut tags = Vec::with_capacity(names.len());
    for name in names {
        let tag = match workspace.resolve_tag(name).await {
            Ok(tag) => tag,
            Err(JotterError::TagNotFound(_)) => {
                workspace
                    .add_tag(&NewTag {
                        label: name.clone(),
                    })
                    .await?;
                workspace.resolve_tag(name).await?
            }
            Err(e) => return Err(e),
        };
        tags.push(tag);
    }
    Ok(tags)
}
