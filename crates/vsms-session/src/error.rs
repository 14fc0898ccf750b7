use thiserror::Error;

use vsms_store::error::StoreError;

/// A submission gate failure. Gates are checked in a fixed order and
/// only the first failure is surfaced, so the clinician fixes one thing
/// at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("child name required")]
    ChildNameRequired,

    #[error("therapist name required")]
    TherapistNameRequired,

    #[error("patient id required")]
    PatientIdRequired,

    #[error("at least one item must be scored")]
    NoItemsScored,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Persistence failed; the session state was not touched and the
    /// submission can be retried as-is.
    #[error("persistence failure: {0}")]
    Store(#[from] StoreError),
}
