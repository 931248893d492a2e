use clap::Parser;
use std::path::PathBuf;
use sudoku_export::ExportScope;

#[derive(Parser)]
#[command(name = "sudoku-export")]
#[command(about = "Export sudoku puzzle folders to a file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the puzzle library JSON file (or set SUDOKU_LIBRARY)
    #[arg(long, value_name = "FILE", env = "SUDOKU_LIBRARY")]
    pub library: PathBuf,

    /// Export every folder in the library
    #[arg(long, conflicts_with = "folder")]
    pub all: bool,

    /// Export a single folder by id
    #[arg(long, value_name = "ID")]
    pub folder: Option<i64>,

    /// Destination directory (defaults to the configured export directory)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Destination file name; the .opensudoku extension is added automatically
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Overwrite an existing file without asking
    #[arg(long)]
    pub yes: bool,

    /// Behave as if storage permission was denied
    #[arg(long, hide = true)]
    pub assume_denied: bool,
}

impl Cli {
    pub fn scope(&self) -> Option<ExportScope> {
        if self.all {
            Some(ExportScope::AllFolders)
        } else {
            self.folder.map(ExportScope::Folder)
        }
    }
}
