pub mod collaborators;
pub mod controller;
pub mod request;
pub mod runner;
pub mod scope;
pub mod screen;
pub mod traits;

pub use collaborators::{DirStorageMedium, FsConflictResolver, StaticPermissionGate};
pub use controller::{ControllerState, Effect, ExportController, Notice};
pub use request::{ExportOutcome, ExportRequest};
pub use runner::{FolderExport, JsonFileRunner, LibraryExport};
pub use scope::{suggested_file_name, ExportScope, FILE_EXTENSION};
pub use screen::{ExportScreen, ScreenEvent, ScreenHandle, UiEvent};
pub use traits::{
    ConflictResolver, ExportJobRunner, FolderRepository, PermissionGate, StorageMedium,
};
