use std::path::PathBuf;

/// Failures outside the parser itself: reading titles, writing records, loading settings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("failed to encode record: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
