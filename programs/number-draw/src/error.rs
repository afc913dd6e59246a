//! Program error type

use std::path::PathBuf;

use draw_engine::DrawError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Draw(#[from] DrawError),

    #[error("failed to read history at '{path}': {source}")]
    ReadHistory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("history at '{path}' is not valid JSON: {source}")]
    HistoryFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode history: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
