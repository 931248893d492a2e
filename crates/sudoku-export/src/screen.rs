use crate::controller::{ControllerState, Effect, ExportController, Notice};
use crate::request::ExportOutcome;
use crate::traits::{ConflictResolver, ExportJobRunner, PermissionGate};
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Inputs to the export screen's single event loop. Collaborator answers
/// arrive here as events, never as direct calls into the controller.
#[derive(Debug)]
pub enum ScreenEvent {
    Save,
    SetDirectory(String),
    SetFileName(String),
    PermissionResult(bool),
    OverwriteDecision(bool),
    JobFinished { token: Uuid, outcome: ExportOutcome },
    Teardown,
}

/// Outbound updates for whatever UI hosts the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Explain why the permission is needed, before the platform prompt.
    Rationale,
    /// Show the indeterminate progress indicator.
    Progress,
    Notice(Notice),
    /// A recoverable outcome (denied permission, declined overwrite) put the
    /// user back in the editable state; the save action may be retried.
    Editing,
    /// The screen has closed; no further events will arrive.
    Closed,
}

/// Sender half handed to the hosting UI.
#[derive(Clone)]
pub struct ScreenHandle {
    tx: mpsc::UnboundedSender<ScreenEvent>,
}

impl ScreenHandle {
    /// Delivery fails only after teardown, which is exactly when events are
    /// meant to be discarded.
    pub fn send(&self, event: ScreenEvent) {
        let _ = self.tx.send(event);
    }
}

/// Drives one `ExportController` on a single event loop. Suspensions
/// (permission prompt, overwrite confirmation, job execution) run as spawned
/// tasks that report back through the event channel; once the loop exits,
/// late reports find a closed channel and are dropped.
pub struct ExportScreen {
    controller: ExportController,
    gate: Arc<dyn PermissionGate>,
    resolver: Arc<dyn ConflictResolver>,
    runner: Arc<dyn ExportJobRunner>,
    events_tx: mpsc::UnboundedSender<ScreenEvent>,
    events_rx: mpsc::UnboundedReceiver<ScreenEvent>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
}

impl ExportScreen {
    pub fn new(
        controller: ExportController,
        gate: Arc<dyn PermissionGate>,
        resolver: Arc<dyn ConflictResolver>,
        runner: Arc<dyn ExportJobRunner>,
    ) -> (Self, ScreenHandle, mpsc::UnboundedReceiver<UiEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();

        let handle = ScreenHandle {
            tx: events_tx.clone(),
        };

        let screen = Self {
            controller,
            gate,
            resolver,
            runner,
            events_tx,
            events_rx,
            ui_tx,
        };

        (screen, handle, ui_rx)
    }

    pub async fn run(mut self) {
        while let Some(event) = self.events_rx.recv().await {
            if !self.handle(event) {
                break;
            }
        }
        let _ = self.ui_tx.send(UiEvent::Closed);
        tracing::debug!("export screen torn down");
    }

    /// Returns false when the screen should close.
    fn handle(&mut self, event: ScreenEvent) -> bool {
        let answered_suspension = matches!(
            &event,
            ScreenEvent::PermissionResult(_) | ScreenEvent::OverwriteDecision(_)
        );

        let effects = match event {
            ScreenEvent::Save => self.controller.request_export(),
            ScreenEvent::SetDirectory(directory) => {
                self.controller.set_directory(directory);
                Vec::new()
            }
            ScreenEvent::SetFileName(file_name) => {
                self.controller.set_file_name(file_name);
                Vec::new()
            }
            ScreenEvent::PermissionResult(granted) => self.controller.permission_result(granted),
            ScreenEvent::OverwriteDecision(confirmed) => {
                self.controller.overwrite_decision(confirmed)
            }
            ScreenEvent::JobFinished { token, outcome } => {
                self.controller.job_finished(token, outcome)
            }
            ScreenEvent::Teardown => return false,
        };

        let keep_open = self.perform(effects);
        if keep_open
            && answered_suspension
            && self.controller.state() == ControllerState::AwaitingInput
        {
            let _ = self.ui_tx.send(UiEvent::Editing);
        }
        keep_open
    }

    fn perform(&mut self, effects: Vec<Effect>) -> bool {
        for effect in effects {
            match effect {
                Effect::ShowRationale => {
                    let _ = self.ui_tx.send(UiEvent::Rationale);
                }
                Effect::RequestPermission => {
                    let gate = Arc::clone(&self.gate);
                    let tx = self.events_tx.clone();
                    tokio::spawn(async move {
                        let granted = gate.request_grant().await;
                        let _ = tx.send(ScreenEvent::PermissionResult(granted));
                    });
                }
                Effect::ConfirmOverwrite(path) => {
                    let resolver = Arc::clone(&self.resolver);
                    let tx = self.events_tx.clone();
                    tokio::spawn(async move {
                        let confirmed = resolver.confirm_overwrite(&path).await;
                        let _ = tx.send(ScreenEvent::OverwriteDecision(confirmed));
                    });
                }
                Effect::ShowProgress => {
                    let _ = self.ui_tx.send(UiEvent::Progress);
                }
                Effect::RunJob { request, token } => {
                    let runner = Arc::clone(&self.runner);
                    let tx = self.events_tx.clone();
                    tokio::spawn(async move {
                        let outcome = runner.run(request).await;
                        let _ = tx.send(ScreenEvent::JobFinished { token, outcome });
                    });
                }
                Effect::Notify(notice) => {
                    let _ = self.ui_tx.send(UiEvent::Notice(notice));
                }
                Effect::Close => return false,
            }
        }
        true
    }
}
