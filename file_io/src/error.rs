use thiserror::Error;

/// Failure while writing or reading a snapshot file.
#[derive(Debug, Error)]
pub enum Error {
    #[error("snapshot i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot encoding failed: {0}")]
    Encoding(#[from] bincode::Error),
    #[error("snapshot is corrupt: {0}")]
    Corrupt(String),
}
