//! Error type for the CLI layer.

use thiserror::Error;

/// Errors surfaced by the binaries.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input document was not valid JSON
    #[error("Invalid input document: {0}")]
    Input(#[from] serde_json::Error),

    /// Embedding failure
    #[error(transparent)]
    Embedding(#[from] embedder_model::EmbeddingError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
