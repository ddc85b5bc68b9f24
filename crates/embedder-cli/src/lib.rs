//! Shared plumbing for the chunk-embedder binaries.
//!
//! Two binaries expose one fixed sentence-embedding model over stdin/stdout
//! as line-oriented JSON:
//!
//! - `embed-chunks`: JSON array of items in, JSON array of vectors out.
//! - `embed-health`: no input, one JSON health report out.
//!
//! Both are single-shot synchronous processes; the model is loaded once at
//! startup and dropped at exit.

pub mod chunks;
pub mod cli;
pub mod embed;
pub mod error;
pub mod health;
pub mod settings;

pub use chunks::filter_chunks;
pub use embed::{embed_chunks, process_document};
pub use error::CliError;
pub use health::HealthReport;
pub use settings::Settings;
