//! Embedding error types.

use thiserror::Error;

/// Errors from model loading and encoding.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// Candle model error
    #[error("Candle error: {0}")]
    Candle(#[from] candle_core::Error),

    /// Tokenizer error
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    /// Model file fetch error
    #[error("Failed to fetch model file: {0}")]
    Fetch(String),

    /// Invalid model configuration
    #[error("Invalid model config: {0}")]
    Config(String),

    /// Encoder returned the wrong number of vectors
    #[error("Encoder returned {actual} vectors for {expected} inputs")]
    BatchMismatch { expected: usize, actual: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
