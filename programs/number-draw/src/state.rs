//! History file on disk

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use draw_engine::DrawHistory;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{CliError, Result};

/// Default history location, relative to the working directory
pub const DEFAULT_HISTORY_PATH: &str = "number-draw-history.json";

/// Load the history, treating a missing file as empty
pub fn load_history(path: &Path) -> Result<DrawHistory> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no history file yet");
            return Ok(DrawHistory::new());
        }
        Err(source) => {
            return Err(CliError::ReadHistory { path: path.to_path_buf(), source });
        }
    };

    DrawHistory::from_json(&content)
        .map_err(|source| CliError::HistoryFormat { path: path.to_path_buf(), source })
}

pub fn save_history(path: &Path, history: &DrawHistory) -> Result<()> {
    let json = history.to_json().map_err(CliError::Encode)?;
    write_file(path, &json)?;
    debug!(path = %path.display(), entries = history.len(), "history saved");
    Ok(())
}

/// Write through a temp file in the target directory, then rename it into
/// place, so an interrupted write never leaves a truncated file behind.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    let write_err = |source| CliError::Write { path: path.to_path_buf(), source };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
