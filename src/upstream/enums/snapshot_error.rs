use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Invalid snapshot document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    #[error("Empty snapshot response")]
    Empty,
}
