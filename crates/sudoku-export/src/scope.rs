use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sudoku_domain::FolderId;

/// Extension appended to every export file. Never user-supplied.
pub const FILE_EXTENSION: &str = ".opensudoku";

/// Which slice of the puzzle library an export covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportScope {
    AllFolders,
    Folder(FolderId),
}

/// Default file name offered to the user: `<folder>-YYYY-MM-DD` for a single
/// folder, `all-folders-YYYY-MM-DD` otherwise. Purely advisory; the user may
/// edit it freely before saving.
pub fn suggested_file_name(scope: ExportScope, folder_name: Option<&str>, date: NaiveDate) -> String {
    let timestamp = date.format("%Y-%m-%d");
    match (scope, folder_name) {
        (ExportScope::Folder(_), Some(name)) => format!("{name}-{timestamp}"),
        _ => format!("all-folders-{timestamp}"),
    }
}
