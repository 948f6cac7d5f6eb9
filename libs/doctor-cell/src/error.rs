use thiserror::Error;

use shared_http::HttpError;

/// Failures while obtaining the canonical doctor set.
///
/// These never cross the directory boundary: the directory turns them into
/// an error message and keeps serving an empty (or previous) set.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Failed to fetch doctors: {0}")]
    Request(String),

    #[error("Failed to fetch doctors: timed out")]
    Timeout,

    #[error("Failed to fetch doctors (HTTP {status})")]
    Status { status: u16, body: String },

    #[error("Failed to parse doctors response: {0}")]
    Malformed(String),
}

impl From<HttpError> for DirectoryError {
    fn from(err: HttpError) -> Self {
        if err.is_timeout() {
            return DirectoryError::Timeout;
        }
        match err {
            HttpError::Request(e) => DirectoryError::Request(e.to_string()),
            HttpError::Status { status, body } => DirectoryError::Status { status, body },
            HttpError::Decode(e) => DirectoryError::Malformed(e.to_string()),
        }
    }
}
