use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The endpoint answered, but not with success.
    #[error("submit rejected: {0}")]
    SubmitRejected(String),

    #[error("fetch rejected: {0}")]
    FetchRejected(String),

    /// Network-level failure. Always retryable; the session leaves its
    /// state untouched so the same submission can be retried verbatim.
    #[error("transport error: {0}")]
    Transport(#[from] Box<ureq::Error>),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<ureq::Error> for StoreError {
    fn from(e: ureq::Error) -> Self {
        StoreError::Transport(Box::new(e))
    }
}

impl From<vsms_core::error::CoreError> for StoreError {
    fn from(e: vsms_core::error::CoreError) -> Self {
        match e {
            vsms_core::error::CoreError::Serialization(inner) => StoreError::Serialization(inner),
            other => StoreError::SubmitRejected(other.to_string()),
        }
    }
}
