//! vsms-store
//!
//! Persistence adapter for the spreadsheet-backed remote endpoint. Thin
//! wrapper around plain HTTP: submit one record, fetch the full archive.
//! Loose legacy row shapes are normalized here so the rest of the
//! workspace only ever sees the canonical [`StoredRecord`].
//!
//! [`StoredRecord`]: vsms_core::models::stored::StoredRecord

pub mod client;
pub mod error;
pub mod normalize;

use vsms_core::models::record::AssessmentRecord;
use vsms_core::models::stored::StoredRecord;

use crate::error::StoreError;

/// The seam between the assessment session and whatever holds the
/// records. Implementations must not report success for `submit` unless
/// the record has genuinely been accepted; the caller resets its entry
/// state the moment this returns `Ok`.
pub trait RecordStore {
    fn submit(&self, record: &AssessmentRecord) -> Result<(), StoreError>;

    /// The whole archive. An empty store yields an empty vec, not an
    /// error; callers replace their cached collection wholesale.
    fn fetch_all(&self) -> Result<Vec<StoredRecord>, StoreError>;
}
