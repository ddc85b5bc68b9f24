//! # embedder-model
//!
//! Local sentence embedding generation using Candle.
//!
//! Wraps sentence-transformers/all-MiniLM-L6-v2 (384 dimensions) behind the
//! [`Embedder`] trait: model files are fetched from HuggingFace Hub once and
//! cached locally, inference runs on the CPU, and everything works offline
//! after the first download.

pub mod bert;
pub mod error;
pub mod hub;
pub mod types;

pub use bert::{SentenceEmbedder, EMBEDDING_DIM, MAX_SEQ_LEN};
pub use error::EmbeddingError;
pub use hub::{ModelFiles, ModelSource, DEFAULT_MODEL_REPO};
pub use types::{Embedder, Embedding};
