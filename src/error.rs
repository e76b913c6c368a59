use thiserror::Error;

#[derive(Error, Debug)]
pub enum KbdMiniError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pattern Error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Unknown platform '{0}' (expected auto, mac or win)")]
    UnknownPlatform(String),

    #[error("No key in the sequence matched the keyboard layout")]
    EmptySequence,
}

pub type KmResult<T> = Result<T, KbdMiniError>;
