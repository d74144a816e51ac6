use std::path::PathBuf;
use thiserror::Error;
use wordsearch::engine::error::EngineError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Puzzle failed verification with {0} issue(s)")]
    Verification(usize),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
