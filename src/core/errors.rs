use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("Failed to decode document: {0}")]
    DecodeFailed(String),
}
