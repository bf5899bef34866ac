use crate::log::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal outcomes of a run. Recoverable anomalies never surface here; they
/// are counted in [`ParseStats`](crate::log::ParseStats).
#[derive(Debug, Error)]
pub enum RunError {
    #[error("cannot open log file {path}: {source}")]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}
