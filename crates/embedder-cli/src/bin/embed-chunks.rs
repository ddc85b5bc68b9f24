//! Chunk embedder.
//!
//! Reads a JSON array of items from stdin, embeds the non-empty string items
//! with all-MiniLM-L6-v2 in one batched call, and writes a JSON array of
//! vectors to stdout.
//!
//! # Usage
//!
//! ```bash
//! echo '["first chunk", "second chunk"]' | embed-chunks
//! ```

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;

use embedder_cli::cli::{init_tracing, Args};
use embedder_cli::embed::process_document;
use embedder_model::SentenceEmbedder;

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = args
        .load_settings()
        .context("Failed to load configuration")?;
    init_tracing(&settings)?;

    // One model instance for the process lifetime, constructed before any
    // input is read.
    let embedder = SentenceEmbedder::load(&settings.model_source())
        .context("Failed to load embedding model")?;

    let mut raw = String::new();
    io::stdin()
        .read_to_string(&mut raw)
        .context("Failed to read stdin")?;

    let document = process_document(&embedder, &raw)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(document.as_bytes())?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;

    Ok(())
}
