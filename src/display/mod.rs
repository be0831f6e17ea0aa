mod cli_formatting;

pub use cli_formatting::{format_note_detail, format_note_line, format_tag_line};
