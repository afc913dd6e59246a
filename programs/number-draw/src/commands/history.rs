//! `history` and `clear-history` commands

use std::path::{Path, PathBuf};

use clap::Args;
use draw_engine::clipboard_text;
use tracing::info;

use crate::error::Result;
use crate::state::{load_history, save_history, write_file};

#[derive(Args, Debug, Clone)]
pub struct HistoryArgs {
    /// Write the history as CSV to this file instead of listing it
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// List past draws newest first, or export them as CSV.
///
/// Returns the lines to print; empty when exporting.
pub fn run_history(args: &HistoryArgs, history_path: &Path) -> Result<Vec<String>> {
    let history = load_history(history_path)?;

    if let Some(csv_path) = &args.csv {
        write_file(csv_path, &history.to_csv())?;
        info!(path = %csv_path.display(), entries = history.len(), "history exported");
        return Ok(Vec::new());
    }

    if history.is_empty() {
        return Ok(vec!["No draws yet.".to_string()]);
    }
    Ok(history
        .entries()
        .iter()
        .map(|e| format!("{}  {}  ({})", e.timestamp(), clipboard_text(&e.results), e.summary()))
        .collect())
}

pub fn run_clear_history(history_path: &Path) -> Result<()> {
    let mut history = load_history(history_path)?;
    let removed = history.len();
    history.clear();
    save_history(history_path, &history)?;
    info!(removed, "history cleared");
    Ok(())
}
