//! Candle BERT sentence encoder.
//!
//! Runs all-MiniLM-L6-v2 on the CPU: attention-mask-aware mean pooling over
//! the token embeddings followed by L2 normalization, matching the model's
//! sentence-transformers pipeline.

use std::path::Path;

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config as BertConfig};
use tokenizers::Tokenizer;
use tracing::{debug, info};

use crate::error::EmbeddingError;
use crate::hub::ModelSource;
use crate::types::{Embedder, Embedding};

/// Output dimension of all-MiniLM-L6-v2.
pub const EMBEDDING_DIM: usize = 384;

/// Token budget per input; longer inputs are truncated.
pub const MAX_SEQ_LEN: usize = 256;

/// CPU sentence encoder, constructed once per process.
pub struct SentenceEmbedder {
    model: BertModel,
    tokenizer: Tokenizer,
    device: Device,
}

impl SentenceEmbedder {
    /// Load the model described by `source`, fetching files if needed.
    pub fn load(source: &ModelSource) -> Result<Self, EmbeddingError> {
        let files = source.fetch()?;
        Self::load_from_paths(&files.config, &files.tokenizer, &files.weights)
    }

    /// Load with the default model repository and cache location.
    pub fn load_default() -> Result<Self, EmbeddingError> {
        Self::load(&ModelSource::default())
    }

    /// Load from explicit local files.
    pub fn load_from_paths(
        config: &Path,
        tokenizer: &Path,
        weights: &Path,
    ) -> Result<Self, EmbeddingError> {
        info!("loading embedding model");

        let device = Device::Cpu;

        let config: BertConfig = serde_json::from_str(&std::fs::read_to_string(config)?)
            .map_err(|e| EmbeddingError::Config(e.to_string()))?;

        let tokenizer = Tokenizer::from_file(tokenizer)
            .map_err(|e| EmbeddingError::Tokenizer(e.to_string()))?;

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights.to_path_buf()], DType::F32, &device)?
        };
        let model = BertModel::load(vb, &config)?;

        info!(dim = EMBEDDING_DIM, max_seq = MAX_SEQ_LEN, "model ready");

        Ok(Self {
            model,
            tokenizer,
            device,
        })
    }

    /// Tokenize a batch into padded id and attention-mask tensors.
    fn tokenize(&self, texts: &[&str]) -> Result<(Tensor, Tensor), EmbeddingError> {
        let encodings = self
            .tokenizer
            .encode_batch(texts.to_vec(), true)
            .map_err(|e| EmbeddingError::Tokenizer(e.to_string()))?;

        // Pad every row to the longest encoding, capped at MAX_SEQ_LEN.
        let width = encodings
            .iter()
            .map(|e| e.get_ids().len())
            .max()
            .unwrap_or(0)
            .min(MAX_SEQ_LEN);

        let mut ids = Vec::with_capacity(texts.len() * width);
        let mut mask = Vec::with_capacity(texts.len() * width);
        for encoding in &encodings {
            let take = encoding.get_ids().len().min(width);
            ids.extend_from_slice(&encoding.get_ids()[..take]);
            mask.extend_from_slice(&encoding.get_attention_mask()[..take]);
            ids.resize(ids.len() + width - take, 0);
            mask.resize(mask.len() + width - take, 0);
        }

        let shape = (texts.len(), width);
        let ids = Tensor::from_vec(ids, shape, &self.device)?;
        let mask = Tensor::from_vec(mask, shape, &self.device)?;
        Ok((ids, mask))
    }
}

/// Mean over the token axis, weighted by the attention mask.
fn mean_pool(hidden: &Tensor, mask: &Tensor) -> Result<Tensor, candle_core::Error> {
    let mask = mask
        .unsqueeze(2)?
        .broadcast_as(hidden.shape())?
        .to_dtype(DType::F32)?;

    let summed = hidden.broadcast_mul(&mask)?.sum(1)?;
    let counts = mask.sum(1)?.clamp(1e-9, f64::MAX)?;
    summed.broadcast_div(&counts)
}

/// Scale each row to unit length.
fn normalize_l2(v: &Tensor) -> Result<Tensor, candle_core::Error> {
    let norms = v.sqr()?.sum_keepdim(1)?.sqrt()?.clamp(1e-12, f64::MAX)?;
    v.broadcast_div(&norms)
}

impl Embedder for SentenceEmbedder {
    fn dimension(&self) -> usize {
        EMBEDDING_DIM
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!(count = texts.len(), "encoding batch");

        let (ids, mask) = self.tokenize(texts)?;
        let type_ids = Tensor::zeros_like(&ids)?;

        let hidden = self.model.forward(&ids, &type_ids, Some(&mask))?;
        let pooled = normalize_l2(&mean_pool(&hidden, &mask)?)?;

        let rows: Vec<Vec<f32>> = pooled.to_vec2()?;
        if rows.len() != texts.len() {
            return Err(EmbeddingError::BatchMismatch {
                expected: texts.len(),
                actual: rows.len(),
            });
        }

        Ok(rows.into_iter().map(Embedding::new).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_missing_paths_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join("missing.json");
        assert!(SentenceEmbedder::load_from_paths(&missing, &missing, &missing).is_err());
    }

    // The remaining tests exercise the real model and are skipped unless the
    // weights are available locally:
    // cargo test -p embedder-model -- --ignored

    #[test]
    #[ignore = "requires model download"]
    fn test_load_default() {
        let embedder = SentenceEmbedder::load_default().unwrap();
        assert_eq!(embedder.dimension(), EMBEDDING_DIM);
    }

    #[test]
    #[ignore = "requires model download"]
    fn test_embed_batch_shape_and_order() {
        let embedder = SentenceEmbedder::load_default().unwrap();
        let batch = embedder.embed_batch(&["first", "second", "third"]).unwrap();
        assert_eq!(batch.len(), 3);
        for emb in &batch {
            assert_eq!(emb.dimension(), EMBEDDING_DIM);
        }
    }

    #[test]
    #[ignore = "requires model download"]
    fn test_same_text_same_vector() {
        let embedder = SentenceEmbedder::load_default().unwrap();
        let batch = embedder.embed_batch(&["hello", "hello"]).unwrap();
        assert_eq!(batch[0], batch[1]);
    }

    #[test]
    #[ignore = "requires model download"]
    fn test_vectors_are_unit_length() {
        let embedder = SentenceEmbedder::load_default().unwrap();
        let emb = embedder.embed("The cat sat on the mat").unwrap();
        let norm: f32 = emb.values().iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-3);
    }
}
