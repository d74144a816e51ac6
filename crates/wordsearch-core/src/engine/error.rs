use thiserror::Error;

use super::config::ConfigError;
use super::utils::sampling::SamplingError;
use crate::core::io::word_list::NormalizeError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input: {source}")]
    InvalidInput {
        #[from]
        source: NormalizeError,
    },

    #[error(
        "Mandatory word '{word}' ({length} letters) cannot fit in any direction of a {rows}x{cols} grid"
    )]
    InfeasibleConstraint {
        word: String,
        length: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Random sampling failed: {source}")]
    Sampling {
        #[from]
        source: SamplingError,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
