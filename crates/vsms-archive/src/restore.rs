use jiff::Timestamp;
use tracing::warn;

use vsms_core::models::domain::DomainCode;
use vsms_core::models::patient::{PatientInfo, PatientType};
use vsms_core::models::record::{AssessmentRecord, DomainTotals};
use vsms_core::models::response::ResponseSnapshot;
use vsms_core::models::stored::StoredRecord;

use crate::error::ArchiveError;

/// Strictly parse the `responsesJSON` column.
pub fn try_decode_responses(stored: &StoredRecord) -> Result<ResponseSnapshot, ArchiveError> {
    if stored.responses_json.trim().is_empty() {
        return Ok(ResponseSnapshot::default());
    }
    Ok(serde_json::from_str(&stored.responses_json)?)
}

/// Parse the `responsesJSON` column, degrading a malformed payload to an
/// empty snapshot. One corrupt row must never take the archive listing
/// or another record's report down with it.
pub fn decode_responses(stored: &StoredRecord) -> ResponseSnapshot {
    try_decode_responses(stored).unwrap_or_else(|e| {
        warn!(
            assessment_id = %stored.assessment_id,
            "stored responses unreadable, regenerating without item detail: {e}"
        );
        ResponseSnapshot::default()
    })
}

/// Rebuild a complete assessment record from its stored projection, for
/// report regeneration. Totals come from the stored columns as-is; the
/// timestamp falls back from `assessmentDate` to the server-recorded
/// `timestamp`, then to the epoch.
pub fn restore_record(stored: &StoredRecord) -> AssessmentRecord {
    let assessment_timestamp = stored
        .assessment_date
        .parse::<Timestamp>()
        .or_else(|_| {
            stored
                .timestamp
                .as_deref()
                .unwrap_or_default()
                .parse::<Timestamp>()
        })
        .unwrap_or(Timestamp::UNIX_EPOCH);

    AssessmentRecord {
        patient: PatientInfo {
            child_name: stored.child_name.clone(),
            dob: stored.dob.clone(),
            age: stored.age.clone(),
            gender: stored.gender.clone(),
            age_level: String::new(),
            patient_type: PatientType::Existing,
            patient_id: stored.patient_id.clone(),
            therapist_name: stored.therapist_name.clone(),
        },
        assessment_id: stored.assessment_id.clone(),
        assessment_timestamp,
        responses: decode_responses(stored),
        domain_totals: DomainTotals {
            shg: stored.domain_total(DomainCode::Shg),
            she: stored.domain_total(DomainCode::She),
            shd: stored.domain_total(DomainCode::Shd),
            sd: stored.domain_total(DomainCode::Sd),
            occ: stored.domain_total(DomainCode::Occ),
            com: stored.domain_total(DomainCode::Com),
            loc: stored.domain_total(DomainCode::Loc),
            soc: stored.domain_total(DomainCode::Soc),
        },
        grand_total: stored.grand_total,
    }
}
