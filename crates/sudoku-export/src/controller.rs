use crate::request::{ExportOutcome, ExportRequest};
use crate::scope::{suggested_file_name, ExportScope};
use crate::traits::{ConflictResolver, FolderRepository, PermissionGate, StorageMedium};
use chrono::NaiveDate;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use sudoku_core::{ExportError, ExportResult};
use uuid::Uuid;

/// Workflow state for one export screen. At most one attempt is in flight
/// (`PermissionPending`, `ConfirmingOverwrite`, or `Running`) at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// User is editing the destination fields.
    AwaitingInput,
    /// A storage-permission request is outstanding.
    PermissionPending,
    /// Destination already exists; awaiting the user's overwrite decision.
    ConfirmingOverwrite,
    /// Job dispatched; no second dispatch permitted.
    Running,
    /// Job finished or a terminal error occurred; screen is closing.
    Terminal,
}

/// User-visible messages surfaced by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    PermissionDenied,
    StorageUnavailable,
    ExportFinished(PathBuf),
    ExportFailed,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::PermissionDenied => write!(f, "Storage permission denied"),
            Notice::StorageUnavailable => write!(f, "Storage is not available"),
            Notice::ExportFinished(path) => {
                write!(f, "Puzzles have been exported to {}", path.display())
            }
            Notice::ExportFailed => write!(f, "Unknown error occurred while exporting puzzles"),
        }
    }
}

/// Side effects the screen driver must perform after a controller step.
/// The controller itself never blocks and never touches the UI or spawns
/// tasks; every suspension is expressed as one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show the permission rationale before the platform prompt.
    ShowRationale,
    /// Ask the permission gate for the grant; report back via
    /// `permission_result`.
    RequestPermission,
    /// Ask the user whether to overwrite the existing file; report back via
    /// `overwrite_decision`.
    ConfirmOverwrite(PathBuf),
    /// Show the indeterminate progress indicator.
    ShowProgress,
    /// Start the export job; report back via `job_finished` with the token.
    RunJob { request: ExportRequest, token: Uuid },
    Notify(Notice),
    /// Tear the screen down. Always the last effect of a terminal step.
    Close,
}

/// Sequences permission acquisition, overwrite confirmation, and job dispatch
/// for a single export screen. Owns the only mutable workflow state; the
/// driver feeds collaborator answers back in and performs the returned
/// effects.
pub struct ExportController {
    state: ControllerState,
    request: ExportRequest,
    job_token: Option<Uuid>,
    gate: Arc<dyn PermissionGate>,
    resolver: Arc<dyn ConflictResolver>,
    storage: Arc<dyn StorageMedium>,
}

impl ExportController {
    /// Validates the scope and builds the initial request. `MissingScope` and
    /// `FolderNotFound` mean the screen must close immediately; no export is
    /// possible and no collaborator beyond the repository has been touched.
    pub fn new(
        scope: Option<ExportScope>,
        repository: &dyn FolderRepository,
        gate: Arc<dyn PermissionGate>,
        resolver: Arc<dyn ConflictResolver>,
        storage: Arc<dyn StorageMedium>,
        default_dir: impl Into<String>,
        today: NaiveDate,
    ) -> ExportResult<Self> {
        let scope = scope.ok_or(ExportError::MissingScope)?;

        let folder_name = match scope {
            ExportScope::AllFolders => None,
            ExportScope::Folder(id) => {
                let name = repository
                    .folder_name(id)
                    .ok_or(ExportError::FolderNotFound(id))?;
                Some(name)
            }
        };

        let suggested = suggested_file_name(scope, folder_name.as_deref(), today);
        tracing::debug!(?scope, %suggested, "export screen initialized");

        Ok(Self {
            state: ControllerState::AwaitingInput,
            request: ExportRequest::new(scope, suggested, default_dir),
            job_token: None,
            gate,
            resolver,
            storage,
        })
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn request(&self) -> &ExportRequest {
        &self.request
    }

    pub fn set_directory(&mut self, directory: impl Into<String>) {
        self.request.directory = directory.into();
    }

    pub fn set_file_name(&mut self, file_name: impl Into<String>) {
        self.request.file_name = file_name.into();
    }

    /// Single entry point for the user's save action. Re-entrant calls while
    /// an attempt is in flight are ignored, never queued.
    pub fn request_export(&mut self) -> Vec<Effect> {
        if self.state != ControllerState::AwaitingInput {
            tracing::debug!(state = ?self.state, "export attempt already in flight, ignoring save");
            return Vec::new();
        }

        // Storage before permission: no grant can fix a missing medium.
        if !self.storage.available() {
            tracing::warn!("storage medium unavailable, closing export screen");
            self.state = ControllerState::Terminal;
            return vec![Effect::Notify(Notice::StorageUnavailable), Effect::Close];
        }

        if !self.gate.check_granted() {
            self.state = ControllerState::PermissionPending;
            let mut effects = Vec::new();
            if self.gate.should_show_rationale() {
                effects.push(Effect::ShowRationale);
            }
            effects.push(Effect::RequestPermission);
            return effects;
        }

        self.check_conflict()
    }

    /// Answer to a `RequestPermission` effect. Denial is recoverable: the
    /// user lands back in `AwaitingInput` and may retry.
    pub fn permission_result(&mut self, granted: bool) -> Vec<Effect> {
        if self.state != ControllerState::PermissionPending {
            tracing::debug!(state = ?self.state, "discarding unexpected permission result");
            return Vec::new();
        }

        if !granted {
            tracing::info!("storage permission denied by user");
            self.state = ControllerState::AwaitingInput;
            return vec![Effect::Notify(Notice::PermissionDenied)];
        }

        self.check_conflict()
    }

    /// Answer to a `ConfirmOverwrite` effect. Declining is an expected user
    /// choice, not a fault: back to `AwaitingInput` with no notice.
    pub fn overwrite_decision(&mut self, confirmed: bool) -> Vec<Effect> {
        if self.state != ControllerState::ConfirmingOverwrite {
            tracing::debug!(state = ?self.state, "discarding unexpected overwrite decision");
            return Vec::new();
        }

        if !confirmed {
            self.state = ControllerState::AwaitingInput;
            return Vec::new();
        }

        self.dispatch()
    }

    /// Completion callback for a `RunJob` effect. Idempotent per dispatch:
    /// duplicate invocations and completions from an abandoned dispatch carry
    /// a token that no longer matches and are discarded.
    pub fn job_finished(&mut self, token: Uuid, outcome: ExportOutcome) -> Vec<Effect> {
        if self.state != ControllerState::Running || self.job_token != Some(token) {
            tracing::debug!(%token, state = ?self.state, "discarding stale job completion");
            return Vec::new();
        }

        self.job_token = None;
        self.state = ControllerState::Terminal;

        let notice = match outcome.output {
            Some(path) if outcome.successful => {
                tracing::info!(path = %path.display(), "export job finished");
                Notice::ExportFinished(path)
            }
            _ => {
                tracing::warn!("export job failed");
                Notice::ExportFailed
            }
        };

        vec![Effect::Notify(notice), Effect::Close]
    }

    /// Resolves the destination from the current field values and either asks
    /// for the overwrite decision or dispatches straight away.
    fn check_conflict(&mut self) -> Vec<Effect> {
        let path = self.request.resolved_path();
        if self.resolver.exists(&path) {
            self.state = ControllerState::ConfirmingOverwrite;
            return vec![Effect::ConfirmOverwrite(path)];
        }

        self.dispatch()
    }

    fn dispatch(&mut self) -> Vec<Effect> {
        let token = Uuid::new_v4();
        self.job_token = Some(token);
        self.state = ControllerState::Running;

        tracing::info!(
            path = %self.request.resolved_path().display(),
            %token,
            "dispatching export job"
        );

        vec![
            Effect::ShowProgress,
            Effect::RunJob {
                request: self.request.clone(),
                token,
            },
        ]
    }
}
