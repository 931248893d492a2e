use crate::request::{ExportOutcome, ExportRequest};
use async_trait::async_trait;
use std::path::Path;
use sudoku_domain::{FolderId, PuzzleLibrary};

#[cfg(test)]
use mockall::automock;

/// Authorization to write to shared storage. The synchronous queries reflect
/// the current grant state; `request_grant` suspends until the user answers
/// the platform prompt and resolves `false` on dismissal rather than hanging.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PermissionGate: Send + Sync {
    fn check_granted(&self) -> bool;

    /// When true, an explanatory prompt must be shown before requesting.
    fn should_show_rationale(&self) -> bool;

    async fn request_grant(&self) -> bool;
}

/// Detects a pre-existing file at the destination and obtains the user's
/// overwrite decision.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ConflictResolver: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    async fn confirm_overwrite(&self, path: &Path) -> bool;
}

/// Performs the export asynchronously. All file-format and I/O concerns live
/// behind this trait; the controller only ever sees the outcome.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ExportJobRunner: Send + Sync {
    async fn run(&self, request: ExportRequest) -> ExportOutcome;
}

/// Availability of the storage medium itself, checked before any permission
/// work. No permission can fix missing storage.
#[cfg_attr(test, automock)]
pub trait StorageMedium: Send + Sync {
    fn available(&self) -> bool;
}

/// Database seam used only while initializing the screen, to resolve a folder
/// scope into a display name.
#[cfg_attr(test, automock)]
pub trait FolderRepository: Send + Sync {
    fn folder_name(&self, id: FolderId) -> Option<String>;
}

impl FolderRepository for PuzzleLibrary {
    fn folder_name(&self, id: FolderId) -> Option<String> {
        PuzzleLibrary::folder_name(self, id).map(str::to_string)
    }
}
