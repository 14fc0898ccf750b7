use jiff::Timestamp;

use vsms_core::models::patient::PatientInfo;
use vsms_core::models::record::AssessmentRecord;
use vsms_scale::catalog::Catalog;
use vsms_scale::responses::ResponseSet;
use vsms_scale::scoring::score;

use crate::error::ValidationError;

/// Validate a candidate (patient, responses) pair and assemble the
/// immutable assessment record.
///
/// Gates run in order and stop at the first failure: child name,
/// therapist name, patient id, then at-least-one-item-scored (a NO
/// satisfies it). On success the responses are snapshotted, scored, and
/// sealed into the record together with a time-derived submission token.
/// No I/O happens here; handing the record to the store is the caller's
/// job.
pub fn assemble(
    catalog: &Catalog,
    patient: &PatientInfo,
    responses: &ResponseSet,
    now: Timestamp,
) -> Result<AssessmentRecord, ValidationError> {
    if patient.child_name.trim().is_empty() {
        return Err(ValidationError::ChildNameRequired);
    }
    if patient.therapist_name.trim().is_empty() {
        return Err(ValidationError::TherapistNameRequired);
    }
    if patient.patient_id.trim().is_empty() {
        return Err(ValidationError::PatientIdRequired);
    }
    if responses.count_attempted() == 0 {
        return Err(ValidationError::NoItemsScored);
    }

    let snapshot = responses.snapshot();
    let summary = score(catalog, &snapshot);

    Ok(AssessmentRecord {
        patient: patient.clone(),
        assessment_id: assessment_id(now),
        assessment_timestamp: now,
        responses: snapshot,
        domain_totals: summary.domain_totals,
        grand_total: summary.grand_total,
    })
}

/// Time-derived submission token. Collisions are cosmetic rather than
/// safety-critical; six digits of epoch milliseconds suffice.
fn assessment_id(now: Timestamp) -> String {
    format!("VSMS-{:06}", now.as_millisecond().rem_euclid(1_000_000))
}
