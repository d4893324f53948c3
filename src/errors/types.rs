use thiserror::Error;

/// Rejection of an upload payload before anything touches storage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("scan payload has no findings field")]
    MissingFindings,
}

/// Failure inside the storage engine. Surfaced to the caller as retryable;
/// the portal never retries internally.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failure: {0}")]
    IoFailure(String),
}

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("Invalid upload: {0}")]
    Validation(#[from] ValidationError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Report parse error: {0}")]
    Report(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
