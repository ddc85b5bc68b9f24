//! Embedding vector type and the encoder trait.

use serde::Serialize;

use crate::error::EmbeddingError;

/// A sentence embedding.
///
/// Serializes as a bare JSON array of numbers, so a `Vec<Embedding>` is
/// exactly the array-of-arrays the output contract calls for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Embedding {
    values: Vec<f32>,
}

impl Embedding {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    /// Number of components in the vector.
    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f32> {
        self.values
    }
}

/// Text-to-vector encoder.
///
/// The process entry point constructs one implementation at startup and
/// passes it by reference to the transform; implementations are never
/// mutated after construction.
pub trait Embedder: Send + Sync {
    /// Output vector dimension.
    fn dimension(&self) -> usize;

    /// Encode a batch of texts, one vector per text, in input order.
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbeddingError>;

    /// Encode a single text.
    fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        self.embed_batch(&[text])?
            .pop()
            .ok_or(EmbeddingError::BatchMismatch {
                expected: 1,
                actual: 0,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedEmbedder;

    impl Embedder for FixedEmbedder {
        fn dimension(&self) -> usize {
            2
        }

        fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbeddingError> {
            Ok(texts
                .iter()
                .map(|t| Embedding::new(vec![t.len() as f32, 0.0]))
                .collect())
        }
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let emb = Embedding::new(vec![1.0, 2.5]);
        assert_eq!(serde_json::to_string(&emb).unwrap(), "[1.0,2.5]");
    }

    #[test]
    fn test_dimension() {
        assert_eq!(Embedding::new(vec![0.0; 384]).dimension(), 384);
    }

    #[test]
    fn test_embed_defaults_to_batch_of_one() {
        let emb = FixedEmbedder.embed("four").unwrap();
        assert_eq!(emb.values(), &[4.0, 0.0]);
    }

    #[test]
    fn test_batch_preserves_order() {
        let batch = FixedEmbedder.embed_batch(&["a", "abc"]).unwrap();
        assert_eq!(batch[0].values()[0], 1.0);
        assert_eq!(batch[1].values()[0], 3.0);
    }
}
