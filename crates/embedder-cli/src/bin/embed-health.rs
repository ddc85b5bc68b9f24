//! Model-load health check.
//!
//! Attempts to load the embedding model and reports the outcome as a single
//! JSON object on stdout. Load failures are part of the report, not the exit
//! code: the process exits 0 either way so callers parse the payload.
//!
//! # Usage
//!
//! ```bash
//! embed-health
//! ```

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use embedder_cli::cli::{init_tracing, Args};
use embedder_cli::health::HealthReport;
use embedder_model::SentenceEmbedder;

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = args
        .load_settings()
        .context("Failed to load configuration")?;
    init_tracing(&settings)?;

    let report = HealthReport::from_load(SentenceEmbedder::load(&settings.model_source()));

    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &report).context("Failed to write health report")?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;

    Ok(())
}
