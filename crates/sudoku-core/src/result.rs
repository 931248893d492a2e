use crate::error::ExportError;

pub type ExportResult<T> = Result<T, ExportError>;
