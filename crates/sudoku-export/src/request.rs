use crate::scope::{ExportScope, FILE_EXTENSION};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Parameters for one export attempt. The scope and suggested name are fixed
/// at screen open; the destination fields stay editable until the job is
/// dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub scope: ExportScope,
    pub suggested_name: String,
    pub directory: String,
    pub file_name: String,
}

impl ExportRequest {
    pub fn new(scope: ExportScope, suggested_name: String, directory: impl Into<String>) -> Self {
        Self {
            scope,
            file_name: suggested_name.clone(),
            suggested_name,
            directory: directory.into(),
        }
    }

    /// Destination file path, recomputed from the current field values on
    /// every call. The user may edit the fields while a permission or
    /// overwrite prompt is open, so the path is never captured early.
    pub fn resolved_path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(format!("{}{}", self.file_name, FILE_EXTENSION))
    }
}

/// Terminal result reported by the job runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOutcome {
    pub successful: bool,
    /// Populated only on success.
    pub output: Option<PathBuf>,
}

impl ExportOutcome {
    pub fn success(output: PathBuf) -> Self {
        Self {
            successful: true,
            output: Some(output),
        }
    }

    pub fn failure() -> Self {
        Self {
            successful: false,
            output: None,
        }
    }
}
