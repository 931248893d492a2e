use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No export scope provided")]
    MissingScope,

    #[error("Folder with id {0} not found")]
    FolderNotFound(i64),

    #[error("Storage medium is not available")]
    StorageUnavailable,

    #[error("Export job failed: {0}")]
    JobFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
