//! The embed transform: one JSON document in, one JSON document out.

use serde_json::Value;
use tracing::debug;

use embedder_model::{Embedder, Embedding};

use crate::chunks::filter_chunks;
use crate::error::CliError;

/// Embed the valid chunks of a parsed input array.
///
/// Returns one vector per retained chunk, in input order. An input with no
/// valid chunks yields an empty vec without an encode call.
pub fn embed_chunks(model: &dyn Embedder, items: &[Value]) -> Result<Vec<Embedding>, CliError> {
    let chunks = filter_chunks(items);
    if chunks.is_empty() {
        debug!("no embeddable chunks in input");
        return Ok(Vec::new());
    }

    debug!(total = items.len(), kept = chunks.len(), "embedding chunks");

    // One batched call for the whole document.
    Ok(model.embed_batch(&chunks)?)
}

/// Run the full transform on a raw stdin document.
///
/// `raw` must be a JSON array; anything else is an input error. The returned
/// string is the complete stdout document, without the trailing newline.
pub fn process_document(model: &dyn Embedder, raw: &str) -> Result<String, CliError> {
    let items: Vec<Value> = serde_json::from_str(raw)?;
    let vectors = embed_chunks(model, &items)?;
    Ok(serde_json::to_string(&vectors)?)
}
