use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Route tracing output to the log file in the data directory; the terminal
/// belongs to the UI.
pub fn init_tracing(config: &AppConfig, filter: Option<String>) -> Result<()> {
    let filter = filter.unwrap_or_else(|| "info".to_string());
    let directive: Directive = filter
        .parse()
        .with_context(|| format!("invalid log directive '{}'", filter))?;
    let env_filter = EnvFilter::builder()
        .with_default_directive(directive)
        .from_env_lossy();

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_path())
        .with_context(|| format!("failed to open log file {}", config.log_path().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .try_init();
    Ok(())
}
