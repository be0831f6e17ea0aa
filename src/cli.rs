use std::io;
use std::sync::Arc;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::Config;
use crate::remote::HttpStore;
use crate::workspace::Workspace;

#[derive(Parser)]
#[command(name = "jotter")]
#[command(about = "Tagged markdown notes, synced through a REST backend")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List notes
    #[command(visible_alias = "ls")]
    List {
        /// Filter titles by substring (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Only show notes carrying this tag, by id or label (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display a note
    #[command(visible_alias = "s")]
    Show {
        /// Note ID (can be partial)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new note
    #[command(visible_alias = "c")]
    Create {
        /// Note title
        title: String,

        /// Markdown body (reads from stdin if not provided)
        #[arg(short, long)]
        markdown: Option<String>,

        /// Tag to attach, by id or label; created if missing (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// Edit an existing note
    #[command(visible_alias = "e")]
    Edit {
        /// Note ID (can be partial)
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New markdown body
        #[arg(short, long)]
        markdown: Option<String>,

        /// Replace the tag set; created if missing (repeatable)
        #[arg(short, long = "tag")]
        tags: Option<Vec<String>>,
    },

    /// Delete a note
    #[command(visible_alias = "rm")]
    Delete {
        /// Note ID (can be partial)
        id: String,
    },

    /// Manage tags
    #[command(subcommand)]
    Tags(TagCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum TagCommands {
    /// List tags
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a tag
    Add {
        /// Tag label
        label: String,
    },

    /// Rename a tag
    Rename {
        /// Tag id or current label
        tag: String,

        /// New label
        label: String,
    },

    /// Delete a tag
    #[command(visible_alias = "rm")]
    Remove {
        /// Tag id or label
        tag: String,
    },
}

impl Commands {
    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            cmd_create, cmd_delete, cmd_edit, cmd_list, cmd_show, cmd_tag_add, cmd_tag_remove,
            cmd_tag_rename, cmd_tags_list,
        };

        // Completions never touch the backend.
        if let Commands::Completions { shell } = &self {
            generate_completions(*shell);
            return Ok(());
        }

        let config = Config::load()?;
        let store = HttpStore::new(&config)?;
        let workspace = Workspace::new(Arc::new(store));
        workspace.refresh().await?;

        match self {
            Commands::List { search, tags, json } => {
                cmd_list(&workspace, search.as_deref(), &tags, json).await
            }
            Commands::Show { id, json } => cmd_show(&workspace, &id, json).await,
            Commands::Create {
                title,
                markdown,
                tags,
            } => cmd_create(&workspace, &title, markdown.as_deref(), &tags).await,
            Commands::Edit {
                id,
                title,
                markdown,
                tags,
            } => {
                cmd_edit(
                    &workspace,
                    &id,
                    title.as_deref(),
                    markdown.as_deref(),
                    tags.as_deref(),
                )
                .await
            }
            Commands::Delete { id } => cmd_delete(&workspace, &id).await,
            Commands::Tags(tag_command) => match tag_command {
                TagCommands::List { json } => cmd_tags_list(&workspace, json).await,
                TagCommands::Add { label } => cmd_tag_add(&workspace, &label).await,
                TagCommands::Rename { tag, label } => {
                    cmd_tag_rename(&workspace, &tag, &label).await
                }
                TagCommands::Remove { tag } => cmd_tag_remove(&workspace, &tag).await,
            },
            Commands::Completions { .. } => unreachable!("handled above"),
        }
    }
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "jotter", &mut io::stdout());
}
