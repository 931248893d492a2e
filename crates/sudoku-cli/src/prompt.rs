use async_trait::async_trait;
use std::io::{BufRead, Write};
use std::path::Path;
use sudoku_export::ConflictResolver;

/// Conflict resolver that asks the user on the terminal before overwriting.
pub struct TerminalConflictResolver;

#[async_trait]
impl ConflictResolver for TerminalConflictResolver {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    async fn confirm_overwrite(&self, path: &Path) -> bool {
        let prompt = format!("File {} already exists. Overwrite? [y/N] ", path.display());
        tokio::task::spawn_blocking(move || {
            let mut stdout = std::io::stdout();
            let _ = stdout.write_all(prompt.as_bytes());
            let _ = stdout.flush();

            let mut answer = String::new();
            if std::io::stdin().lock().read_line(&mut answer).is_err() {
                return false;
            }
            matches!(answer.trim(), "y" | "Y" | "yes")
        })
        .await
        .unwrap_or(false)
    }
}
