use owo_colors::OwoColorize;

use crate::types::{Note, Tag};

/// Format a note for single-line display with colors
pub fn format_note_line(note: &Note) -> String {
    let id_padded = format!("{:10}", note.id);
    let colored_id = id_padded.cyan().to_string();

    let badges = note
        .tags
        .iter()
        .map(|tag| format!("[{}]", tag.label).blue().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    if badges.is_empty() {
        format!("{} {}", colored_id, note.title)
    } else {
        format!("{} {} {}", colored_id, note.title, badges)
    }
}

/// Format a note for full display: title, tags, then the raw markdown
/// body. Markup is passed through untouched.
pub fn format_note_detail(note: &Note) -> String {
    let mut out = String::new();
    out.push_str(&note.title.bold().to_string());
    out.push('\n');

    if !note.tags.is_empty() {
        let badges = note
            .tags
            .iter()
            .map(|tag| format!("[{}]", tag.label).blue().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&badges);
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&note.markdown);
    out
}

/// Format a tag for single-line display with colors
pub fn format_tag_line(tag: &Tag) -> String {
    format!("{} {}", format!("{:10}", tag.id).cyan(), tag.label)
}
