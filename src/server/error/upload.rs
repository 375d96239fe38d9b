use thiserror::Error;

/// Failures talking to the remote image host.
///
/// Every variant results in a 502 Bad Gateway; the cause is logged only.
#[derive(Error, Debug)]
pub enum UploadError {
    /// Transport level failure reaching the host.
    #[error("Image host request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Host answered with a non-success status.
    #[error("Image host rejected request with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// Upload did not finish within the configured timeout.
    #[error("Upload of '{file_name}' timed out after {secs}s")]
    Timeout { file_name: String, secs: u64 },

    /// Host answered 2xx but the body is not what we expect.
    #[error("Unexpected image host response: {0}")]
    InvalidResponse(String),
}
