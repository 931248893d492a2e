use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type FolderId = i64;

/// A named group of puzzles in the library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderInfo {
    pub id: FolderId,
    pub name: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl FolderInfo {
    pub fn new(id: FolderId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
