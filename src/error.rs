use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotterError {
    #[error("note '{0}' not found")]
    NoteNotFound(String),

    #[error("ambiguous ID '{0}' matches multiple notes")]
    AmbiguousId(String, Vec<String>),

    #[error("tag '{0}' not found")]
    TagNotFound(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("server error ({status}): {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, JotterError>;
