use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("group size must be non-zero")]
    InvalidGroupSize,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
