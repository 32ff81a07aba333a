//! Failures of the remote document service.
//!
//! The variants only exist for diagnostics; callers surface every one of them
//! to the user as the same "remote operation failed" outcome.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{endpoint} returned non-success status {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },
    #[error("invalid {endpoint} response payload: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to read '{}': {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// HTTP status of the failed call, when the backend answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            Self::Decode { .. } | Self::ReadFile { .. } => None,
        }
    }
}
