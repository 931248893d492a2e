mod cli;
mod prompt;

use clap::Parser;
use cli::Cli;
use prompt::TerminalConflictResolver;
use std::sync::Arc;
use sudoku_core::AppConfig;
use sudoku_domain::PuzzleLibrary;
use sudoku_export::{
    ConflictResolver, DirStorageMedium, ExportController, ExportScreen, FsConflictResolver,
    JsonFileRunner, Notice, PermissionGate, ScreenEvent, StaticPermissionGate, UiEvent,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("SUDOKU_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();
    let config = AppConfig::load();

    let json = std::fs::read_to_string(&cli.library)
        .map_err(|e| anyhow::anyhow!("Failed to read library {}: {}", cli.library.display(), e))?;
    let library = Arc::new(PuzzleLibrary::from_json(&json)?);

    let export_dir = cli
        .dir
        .clone()
        .unwrap_or_else(|| config.effective_export_dir());

    let gate: Arc<dyn PermissionGate> = if cli.assume_denied {
        Arc::new(StaticPermissionGate::denied_with_rationale())
    } else {
        Arc::new(StaticPermissionGate::granted())
    };
    let resolver: Arc<dyn ConflictResolver> = if cli.yes {
        Arc::new(FsConflictResolver::auto_confirm())
    } else {
        Arc::new(TerminalConflictResolver)
    };
    let storage = Arc::new(DirStorageMedium::new(&export_dir));
    let runner = Arc::new(JsonFileRunner::new(Arc::clone(&library)));

    let mut controller = ExportController::new(
        cli.scope(),
        library.as_ref(),
        Arc::clone(&gate),
        Arc::clone(&resolver),
        storage,
        export_dir.to_string_lossy(),
        chrono::Local::now().date_naive(),
    )?;
    if let Some(name) = &cli.name {
        controller.set_file_name(name.clone());
    }

    let (screen, handle, mut ui_rx) = ExportScreen::new(controller, gate, resolver, runner);
    handle.send(ScreenEvent::Save);
    let run = tokio::spawn(screen.run());

    let mut failed = false;
    let mut denied = false;
    while let Some(event) = ui_rx.recv().await {
        match event {
            UiEvent::Rationale => {
                println!("Storage permission is needed to write the export file.");
            }
            UiEvent::Progress => {
                println!("Exporting puzzles...");
            }
            UiEvent::Notice(notice) => {
                match notice {
                    Notice::ExportFailed | Notice::StorageUnavailable => failed = true,
                    Notice::PermissionDenied => {
                        failed = true;
                        denied = true;
                    }
                    Notice::ExportFinished(_) => {}
                }
                println!("{notice}");
            }
            UiEvent::Editing => {
                // A one-shot run has no interactive retry; give up here.
                if !denied {
                    println!("Export cancelled.");
                }
                handle.send(ScreenEvent::Teardown);
            }
            UiEvent::Closed => break,
        }
    }
    run.await?;

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
