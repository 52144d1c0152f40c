//! Log subscriber setup.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "warn";

pub struct LogConfig {
    /// Explicit level; takes precedence over `RUST_LOG`.
    pub level: Option<String>,
    /// Log destination; stderr when unset.
    pub file: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("failed to open log file '{}': {source}", path.display())]
    File { path: PathBuf, source: io::Error },

    #[error("failed to install logger: {0}")]
    Install(String),
}

pub fn env_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
    }
}

pub fn init(config: &LogConfig) -> Result<(), LogError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.level.as_deref()))
        .with_target(false);

    let installed = match &config.file {
        Some(path) => {
            let file = File::create(path).map_err(|source| LogError::File {
                path: path.clone(),
                source,
            })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(io::stderr).try_init(),
    };

    installed.map_err(|err| LogError::Install(err.to_string()))
}
