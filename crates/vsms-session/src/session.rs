use jiff::Timestamp;
use tracing::info;

use vsms_core::models::patient::{PatientInfo, PatientType};
use vsms_core::models::record::AssessmentRecord;
use vsms_core::models::response::ResponseValue;
use vsms_core::models::stored::StoredRecord;
use vsms_scale::catalog::Catalog;
use vsms_scale::error::ScaleError;
use vsms_scale::responses::ResponseSet;
use vsms_store::RecordStore;

use crate::allocator::next_patient_id;
use crate::assemble::assemble;
use crate::error::SessionError;

/// The single active entry context: one patient form and one response
/// set, exclusively owned. Every operation is a synchronous local
/// computation; the only suspension point in the surrounding system is
/// the store call inside [`Session::submit`].
pub struct Session {
    catalog: Catalog,
    patient: PatientInfo,
    responses: ResponseSet,
    last_record: Option<AssessmentRecord>,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        let responses = ResponseSet::new(&catalog);
        Self {
            catalog,
            patient: PatientInfo::default(),
            responses,
            last_record: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn patient(&self) -> &PatientInfo {
        &self.patient
    }

    pub fn patient_mut(&mut self) -> &mut PatientInfo {
        &mut self.patient
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn set_response(&mut self, item_id: u32, value: ResponseValue) -> Result<(), ScaleError> {
        self.responses.set(item_id, value)
    }

    /// Re-derive the next patient id from the latest fetched archive.
    /// Only applies while the patient is marked new; an existing
    /// patient's id is clinician-entered. Must be called every time the
    /// archive collection is replaced so the id never comes from a stale
    /// collection.
    pub fn refresh_patient_id(&mut self, records: &[StoredRecord]) {
        if self.patient.patient_type == PatientType::New {
            self.patient.patient_id =
                next_patient_id(records.iter().map(|record| record.patient_id.as_str()));
        }
    }

    /// Validate, assemble, and hand the record to the store.
    ///
    /// On success the session resets for the next case: responses back
    /// to NOT TESTED, identity fields cleared (patient type, age level
    /// and therapist are kept). On any failure, validation or store
    /// alike, the session state is left untouched so the same submission
    /// can be retried without re-entry.
    pub fn submit(
        &mut self,
        store: &impl RecordStore,
        now: Timestamp,
    ) -> Result<AssessmentRecord, SessionError> {
        let record = assemble(&self.catalog, &self.patient, &self.responses, now)?;
        store.submit(&record)?;

        info!(
            patient_id = %record.patient.patient_id,
            assessment_id = %record.assessment_id,
            grand_total = record.grand_total,
            "assessment stored"
        );

        self.responses.reset();
        self.patient.clear_identity();
        self.last_record = Some(record.clone());
        Ok(record)
    }

    /// The most recently submitted record, kept around for immediate
    /// report download.
    pub fn last_record(&self) -> Option<&AssessmentRecord> {
        self.last_record.as_ref()
    }
}
