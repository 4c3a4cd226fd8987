use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TailError {
    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start tailer thread: {0}")]
    Spawn(#[source] std::io::Error),
}

impl TailError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}
