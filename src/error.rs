// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordFreqError {
    /// The input stream failed mid-read. Nothing is printed when this happens.
    #[error("input unreadable: {0}")]
    InputUnreadable(#[source] io::Error),

    #[error("could not load config file '{}': {source}", path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("could not write output: {0}")]
    Output(#[source] io::Error),

    #[error("could not encode report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WordFreqError>;
