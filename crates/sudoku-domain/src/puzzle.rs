use crate::folder::FolderId;
use serde::{Deserialize, Serialize};

pub type PuzzleId = i64;

pub const CELL_COUNT: usize = 81;

/// A single puzzle record. `cells` holds one digit per cell in row-major
/// order, `0` meaning empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: PuzzleId,
    pub folder_id: FolderId,
    pub cells: String,
}

impl Puzzle {
    pub fn new(id: PuzzleId, folder_id: FolderId, cells: impl Into<String>) -> Self {
        Self {
            id,
            folder_id,
            cells: cells.into(),
        }
    }

    pub fn is_well_formed(&self) -> bool {
        self.cells.len() == CELL_COUNT && self.cells.bytes().all(|b| b.is_ascii_digit())
    }
}
