use crate::folder::{FolderId, FolderInfo};
use crate::puzzle::Puzzle;
use serde::{Deserialize, Serialize};
use sudoku_core::{ExportError, ExportResult};

/// In-memory view of the puzzle library. The CLI loads one of these from a
/// JSON file; the export job runner reads scoped slices out of it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PuzzleLibrary {
    #[serde(default)]
    pub folders: Vec<FolderInfo>,
    #[serde(default)]
    pub puzzles: Vec<Puzzle>,
}

impl PuzzleLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> ExportResult<Self> {
        serde_json::from_str(json).map_err(|e| ExportError::Serialization(e.to_string()))
    }

    pub fn folder(&self, id: FolderId) -> Option<&FolderInfo> {
        self.folders.iter().find(|f| f.id == id)
    }

    pub fn folder_name(&self, id: FolderId) -> Option<&str> {
        self.folder(id).map(|f| f.name.as_str())
    }

    pub fn puzzles_in_folder(&self, id: FolderId) -> Vec<Puzzle> {
        self.puzzles
            .iter()
            .filter(|p| p.folder_id == id)
            .cloned()
            .collect()
    }

    pub fn add_folder(&mut self, folder: FolderInfo) {
        self.folders.push(folder);
    }

    pub fn add_puzzle(&mut self, puzzle: Puzzle) {
        self.puzzles.push(puzzle);
    }
}
