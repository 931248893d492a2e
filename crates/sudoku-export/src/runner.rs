use crate::request::{ExportOutcome, ExportRequest};
use crate::scope::ExportScope;
use crate::traits::ExportJobRunner;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use sudoku_domain::{FolderInfo, Puzzle, PuzzleLibrary};

pub const EXPORT_FORMAT_VERSION: u32 = 1;

/// One folder and its puzzles in the export payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderExport {
    pub folder: FolderInfo,
    pub puzzles: Vec<Puzzle>,
}

/// Top-level export payload written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryExport {
    pub version: u32,
    pub exported_at: DateTime<Utc>,
    pub folders: Vec<FolderExport>,
}

/// Writes the scoped slice of a puzzle library to the request's resolved
/// path as pretty-printed JSON. Any I/O or serialization problem becomes a
/// failure outcome; the controller only ever sees the outcome.
pub struct JsonFileRunner {
    library: Arc<PuzzleLibrary>,
}

impl JsonFileRunner {
    pub fn new(library: Arc<PuzzleLibrary>) -> Self {
        Self { library }
    }

    fn payload(&self, scope: ExportScope) -> LibraryExport {
        let folders = self
            .library
            .folders
            .iter()
            .filter(|folder| match scope {
                ExportScope::AllFolders => true,
                ExportScope::Folder(id) => folder.id == id,
            })
            .map(|folder| FolderExport {
                folder: folder.clone(),
                puzzles: self.library.puzzles_in_folder(folder.id),
            })
            .collect();

        LibraryExport {
            version: EXPORT_FORMAT_VERSION,
            exported_at: Utc::now(),
            folders,
        }
    }
}

#[async_trait]
impl ExportJobRunner for JsonFileRunner {
    async fn run(&self, request: ExportRequest) -> ExportOutcome {
        let path = request.resolved_path();
        let payload = self.payload(request.scope);

        let bytes = match serde_json::to_vec_pretty(&payload) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize export payload");
                return ExportOutcome::failure();
            }
        };

        match tokio::fs::write(&path, bytes).await {
            Ok(()) => {
                tracing::info!(path = %path.display(), "export written");
                ExportOutcome::success(path)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to write export file");
                ExportOutcome::failure()
            }
        }
    }
}
