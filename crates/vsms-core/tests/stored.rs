use std::collections::BTreeMap;

use vsms_core::models::domain::DomainCode;
use vsms_core::models::patient::{PatientInfo, PatientType};
use vsms_core::models::record::{AssessmentRecord, DomainTotals};
use vsms_core::models::response::{ResponseSnapshot, ResponseValue};
use vsms_core::models::stored::StoredRecord;

fn sample_record() -> AssessmentRecord {
    let mut totals = DomainTotals::default();
    totals.add(DomainCode::Com, 7.5);
    totals.add(DomainCode::Loc, 2.0);

    let mut values = BTreeMap::new();
    values.insert(9, ResponseValue::Yes);
    values.insert(17, ResponseValue::No);

    AssessmentRecord {
        patient: PatientInfo {
            child_name: "Asha".to_string(),
            dob: "2019-03-21".to_string(),
            age: "7".to_string(),
            gender: "F".to_string(),
            age_level: "2-3".to_string(),
            patient_type: PatientType::New,
            patient_id: "VIN104".to_string(),
            therapist_name: "Dr. Rao".to_string(),
        },
        assessment_id: "VSMS-123456".to_string(),
        assessment_timestamp: "2026-08-06T10:30:00Z".parse().unwrap(),
        responses: ResponseSnapshot(values),
        grand_total: totals.sum(),
        domain_totals: totals,
    }
}

#[test]
fn projection_carries_every_column() {
    let record = sample_record();
    let stored = StoredRecord::from_record(&record).unwrap();

    assert_eq!(stored.patient_id, "VIN104");
    assert_eq!(stored.child_name, "Asha");
    assert_eq!(stored.therapist_name, "Dr. Rao");
    assert_eq!(stored.assessment_id, "VSMS-123456");
    assert_eq!(stored.com_total, 7.5);
    assert_eq!(stored.loc_total, 2.0);
    assert_eq!(stored.grand_total, 9.5);
    assert!(stored.timestamp.is_none());

    // The snapshot must survive a round trip through the JSON column.
    let parsed: ResponseSnapshot = serde_json::from_str(&stored.responses_json).unwrap();
    assert_eq!(parsed, record.responses);
}

#[test]
fn stored_column_names_match_the_sheet_layout() {
    let stored = StoredRecord::from_record(&sample_record()).unwrap();
    let json = serde_json::to_value(&stored).unwrap();

    for key in [
        "patientId",
        "childName",
        "assessmentDate",
        "therapistName",
        "assessmentId",
        "responsesJSON",
        "SHG_total",
        "SOC_total",
        "grandTotal",
    ] {
        assert!(json.get(key).is_some(), "missing column {key}");
    }
}

#[test]
fn domain_total_reads_the_matching_column() {
    let stored = StoredRecord::from_record(&sample_record()).unwrap();
    assert_eq!(stored.domain_total(DomainCode::Com), 7.5);
    assert_eq!(stored.domain_total(DomainCode::Shg), 0.0);
}

#[test]
fn domain_totals_sum_matches_iteration() {
    let record = sample_record();
    let by_iter: f64 = record.domain_totals.iter().map(|(_, total)| total).sum();
    assert_eq!(record.domain_totals.sum(), by_iter);
    assert_eq!(record.grand_total, record.domain_totals.sum());
}
