//! Model file resolution.
//!
//! The encoder needs three files locally: model config, tokenizer, and
//! safetensors weights. They are fetched from HuggingFace Hub on first use
//! and kept in a local cache directory afterwards.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::EmbeddingError;

/// Default model repository on HuggingFace.
pub const DEFAULT_MODEL_REPO: &str = "sentence-transformers/all-MiniLM-L6-v2";

/// Files the encoder needs locally.
const REQUIRED_FILES: &[&str] = &["config.json", "tokenizer.json", "model.safetensors"];

/// Where model files come from and where they are cached.
#[derive(Debug, Clone)]
pub struct ModelSource {
    /// HuggingFace repository id
    pub repo_id: String,
    /// Local cache directory
    pub cache_dir: PathBuf,
}

impl Default for ModelSource {
    fn default() -> Self {
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from(".cache"))
            .join("chunk-embedder")
            .join("models");

        Self {
            repo_id: DEFAULT_MODEL_REPO.to_string(),
            cache_dir,
        }
    }
}

impl ModelSource {
    pub fn new(repo_id: impl Into<String>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_id: repo_id.into(),
            cache_dir: cache_dir.into(),
        }
    }

    /// Directory holding this repository's cached files.
    pub fn local_dir(&self) -> PathBuf {
        self.cache_dir.join(self.repo_id.replace('/', "_"))
    }

    /// Check whether every required file is already cached.
    pub fn is_complete(&self) -> bool {
        let dir = self.local_dir();
        REQUIRED_FILES.iter().all(|f| dir.join(f).exists())
    }

    /// Resolve local paths to the model files, downloading whatever is
    /// missing from the cache.
    pub fn fetch(&self) -> Result<ModelFiles, EmbeddingError> {
        let dir = self.local_dir();

        if self.is_complete() {
            debug!(path = ?dir, "using cached model files");
        } else {
            info!(repo = %self.repo_id, "fetching model files from HuggingFace Hub");
            self.download_missing()?;
        }

        Ok(ModelFiles {
            config: dir.join("config.json"),
            tokenizer: dir.join("tokenizer.json"),
            weights: dir.join("model.safetensors"),
        })
    }

    fn download_missing(&self) -> Result<(), EmbeddingError> {
        use hf_hub::api::sync::Api;

        let api = Api::new().map_err(|e| EmbeddingError::Fetch(e.to_string()))?;
        let repo = api.model(self.repo_id.clone());

        let dir = self.local_dir();
        fs::create_dir_all(&dir)?;

        for name in REQUIRED_FILES {
            let dest = dir.join(name);
            if dest.exists() {
                continue;
            }
            debug!(file = name, "downloading");
            let fetched = repo
                .get(name)
                .map_err(|e| EmbeddingError::Fetch(format!("{}: {}", name, e)))?;
            fs::copy(&fetched, &dest)?;
        }

        Ok(())
    }
}

/// Local paths to the files the encoder loads.
#[derive(Debug, Clone)]
pub struct ModelFiles {
    pub config: PathBuf,
    pub tokenizer: PathBuf,
    pub weights: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_source() {
        let source = ModelSource::default();
        assert_eq!(source.repo_id, DEFAULT_MODEL_REPO);
        assert!(source.cache_dir.to_string_lossy().contains("chunk-embedder"));
    }

    #[test]
    fn test_local_dir_flattens_repo_id() {
        let source = ModelSource::new("org/model", "/cache");
        assert_eq!(source.local_dir(), PathBuf::from("/cache/org_model"));
    }

    #[test]
    fn test_empty_cache_is_incomplete() {
        let temp = TempDir::new().unwrap();
        let source = ModelSource::new("test/model", temp.path());
        assert!(!source.is_complete());
    }

    #[test]
    fn test_complete_cache_is_detected() {
        let temp = TempDir::new().unwrap();
        let source = ModelSource::new("test/model", temp.path());
        let dir = source.local_dir();
        fs::create_dir_all(&dir).unwrap();
        for name in REQUIRED_FILES {
            fs::write(dir.join(name), b"x").unwrap();
        }
        assert!(source.is_complete());
    }
}
