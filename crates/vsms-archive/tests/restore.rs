use vsms_core::models::domain::DomainCode;
use vsms_core::models::patient::PatientType;
use vsms_core::models::response::ResponseValue;
use vsms_core::models::stored::StoredRecord;
use vsms_archive::restore::{decode_responses, restore_record, try_decode_responses};

fn stored() -> StoredRecord {
    StoredRecord {
        patient_id: "VIN100".to_string(),
        child_name: "Asha".to_string(),
        dob: "2019-03-21".to_string(),
        age: "7".to_string(),
        gender: "F".to_string(),
        assessment_date: "2026-08-06T10:30:00Z".to_string(),
        therapist_name: "Dr. Rao".to_string(),
        assessment_id: "VSMS-123456".to_string(),
        responses_json: r#"{"1":"YES","2":"NO","3":"NOT_TESTED"}"#.to_string(),
        com_total: 7.5,
        soc_total: 1.0,
        grand_total: 8.5,
        timestamp: Some("2026-08-06T10:30:02Z".to_string()),
        ..StoredRecord::default()
    }
}

#[test]
fn well_formed_responses_decode() {
    let snapshot = decode_responses(&stored());
    assert_eq!(snapshot.get(1), Some(ResponseValue::Yes));
    assert_eq!(snapshot.get(2), Some(ResponseValue::No));
    assert_eq!(snapshot.get(3), Some(ResponseValue::NotTested));
}

#[test]
fn malformed_responses_degrade_to_empty() {
    let mut record = stored();
    record.responses_json = "{not json".to_string();

    assert!(try_decode_responses(&record).is_err());
    assert!(decode_responses(&record).is_empty());
}

#[test]
fn blank_responses_column_is_just_empty() {
    let mut record = stored();
    record.responses_json = String::new();

    assert!(try_decode_responses(&record).unwrap().is_empty());
}

#[test]
fn one_corrupt_row_leaves_the_rest_usable() {
    let mut corrupt = stored();
    corrupt.responses_json = "[[".to_string();
    let rows = vec![corrupt, stored()];

    let snapshots: Vec<_> = rows.iter().map(decode_responses).collect();
    assert!(snapshots[0].is_empty());
    assert_eq!(snapshots[1].get(1), Some(ResponseValue::Yes));
}

#[test]
fn restore_rebuilds_the_full_record() {
    let record = restore_record(&stored());

    assert_eq!(record.patient.child_name, "Asha");
    assert_eq!(record.patient.patient_id, "VIN100");
    assert_eq!(record.patient.patient_type, PatientType::Existing);
    assert_eq!(record.assessment_id, "VSMS-123456");
    assert_eq!(
        record.assessment_timestamp,
        "2026-08-06T10:30:00Z".parse().unwrap()
    );
    assert_eq!(record.domain_totals.get(DomainCode::Com), 7.5);
    assert_eq!(record.domain_totals.get(DomainCode::Soc), 1.0);
    assert_eq!(record.grand_total, 8.5);
    assert_eq!(record.responses.get(1), Some(ResponseValue::Yes));
}

#[test]
fn restore_falls_back_to_the_server_timestamp() {
    let mut row = stored();
    row.assessment_date = "not a date".to_string();

    let record = restore_record(&row);
    assert_eq!(
        record.assessment_timestamp,
        "2026-08-06T10:30:02Z".parse().unwrap()
    );

    row.timestamp = None;
    let record = restore_record(&row);
    assert_eq!(record.assessment_timestamp, jiff::Timestamp::UNIX_EPOCH);
}
