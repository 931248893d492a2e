use crate::traits::{ConflictResolver, PermissionGate, StorageMedium};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Conflict resolver backed by the real filesystem, with a fixed overwrite
/// answer. Interactive front ends supply their own resolver; this one covers
/// `--yes` runs and tests.
pub struct FsConflictResolver {
    confirm: bool,
}

impl FsConflictResolver {
    pub fn auto_confirm() -> Self {
        Self { confirm: true }
    }

    pub fn auto_decline() -> Self {
        Self { confirm: false }
    }
}

#[async_trait]
impl ConflictResolver for FsConflictResolver {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    async fn confirm_overwrite(&self, path: &Path) -> bool {
        tracing::debug!(path = %path.display(), confirm = self.confirm, "auto overwrite decision");
        self.confirm
    }
}

/// Storage medium modeled as a root directory that must exist before any
/// export work starts.
pub struct DirStorageMedium {
    root: PathBuf,
}

impl DirStorageMedium {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl StorageMedium for DirStorageMedium {
    fn available(&self) -> bool {
        self.root.is_dir()
    }
}

/// Permission gate with a fixed answer. Desktop builds have no runtime
/// permission prompt, so the grant state is decided at wiring time; the seam
/// keeps the workflow identical on platforms that do prompt.
pub struct StaticPermissionGate {
    granted: bool,
    rationale: bool,
}

impl StaticPermissionGate {
    pub fn granted() -> Self {
        Self {
            granted: true,
            rationale: false,
        }
    }

    pub fn denied() -> Self {
        Self {
            granted: false,
            rationale: false,
        }
    }

    pub fn denied_with_rationale() -> Self {
        Self {
            granted: false,
            rationale: true,
        }
    }
}

#[async_trait]
impl PermissionGate for StaticPermissionGate {
    fn check_granted(&self) -> bool {
        self.granted
    }

    fn should_show_rationale(&self) -> bool {
        self.rationale
    }

    async fn request_grant(&self) -> bool {
        // A denied gate resolves false rather than hanging.
        self.granted
    }
}
