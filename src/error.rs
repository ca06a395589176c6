use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TidingsError {
    #[error("No tokio runtime is running; build the timer from an explicit runtime handle")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
