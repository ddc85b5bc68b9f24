//! Shared CLI arguments and logging setup for the binaries.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::settings::Settings;

/// Arguments common to both binaries.
///
/// The stdin/stdout contract itself takes no flags; these only override
/// where configuration is read from and how loud the diagnostics are.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to config file (overrides ~/.config/chunk-embedder/config.toml)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Load settings and apply CLI overrides (highest precedence).
    pub fn load_settings(&self) -> Result<Settings, CliError> {
        let mut settings = Settings::load(self.config.as_deref())?;
        if let Some(level) = &self.log_level {
            settings.log_level = level.clone();
        }
        Ok(settings)
    }
}

/// Install the global tracing subscriber.
///
/// Stdout carries the JSON protocol, so all diagnostics go to stderr.
pub fn init_tracing(settings: &Settings) -> Result<(), CliError> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::Config(e.to_string()))
}
