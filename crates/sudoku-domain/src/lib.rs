pub mod folder;
pub mod library;
pub mod puzzle;

pub use folder::{FolderId, FolderInfo};
pub use library::PuzzleLibrary;
pub use puzzle::{Puzzle, PuzzleId, CELL_COUNT};
