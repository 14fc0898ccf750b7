use jiff::Timestamp;

use vsms_core::models::domain::DomainCode;
use vsms_core::models::patient::PatientInfo;
use vsms_core::models::response::ResponseValue;
use vsms_scale::catalog::{Catalog, Weighting};
use vsms_scale::responses::ResponseSet;
use vsms_session::assemble::assemble;
use vsms_session::error::ValidationError;

fn now() -> Timestamp {
    "2026-08-06T10:30:00Z".parse().unwrap()
}

fn valid_patient() -> PatientInfo {
    PatientInfo {
        child_name: "Asha".to_string(),
        patient_id: "VIN100".to_string(),
        therapist_name: "Dr. Rao".to_string(),
        ..PatientInfo::default()
    }
}

fn one_scored_set(catalog: &Catalog) -> ResponseSet {
    let mut responses = ResponseSet::new(catalog);
    responses.set(1, ResponseValue::Yes).unwrap();
    responses
}

#[test]
fn missing_child_name_fails_first_even_with_other_gaps() {
    let catalog = Catalog::new(Weighting::Flat);
    let responses = ResponseSet::new(&catalog);
    let patient = PatientInfo {
        child_name: "   ".to_string(),
        patient_id: String::new(),
        therapist_name: String::new(),
        ..PatientInfo::default()
    };

    // Every gate would fail here; only the first may surface.
    let err = assemble(&catalog, &patient, &responses, now()).unwrap_err();
    assert_eq!(err, ValidationError::ChildNameRequired);
    assert_eq!(err.to_string(), "child name required");
}

#[test]
fn therapist_gate_runs_after_child_name() {
    let catalog = Catalog::new(Weighting::Flat);
    let responses = one_scored_set(&catalog);
    let patient = PatientInfo {
        child_name: "Asha".to_string(),
        patient_id: String::new(),
        therapist_name: " ".to_string(),
        ..PatientInfo::default()
    };

    let err = assemble(&catalog, &patient, &responses, now()).unwrap_err();
    assert_eq!(err, ValidationError::TherapistNameRequired);
}

#[test]
fn patient_id_gate_runs_third() {
    let catalog = Catalog::new(Weighting::Flat);
    let responses = one_scored_set(&catalog);
    let patient = PatientInfo {
        patient_id: "  ".to_string(),
        ..valid_patient()
    };

    let err = assemble(&catalog, &patient, &responses, now()).unwrap_err();
    assert_eq!(err, ValidationError::PatientIdRequired);
    assert_eq!(err.to_string(), "patient id required");
}

#[test]
fn all_not_tested_fails_the_scored_gate() {
    let catalog = Catalog::new(Weighting::Flat);
    let responses = ResponseSet::new(&catalog);

    let err = assemble(&catalog, &valid_patient(), &responses, now()).unwrap_err();
    assert_eq!(err, ValidationError::NoItemsScored);
    assert_eq!(err.to_string(), "at least one item must be scored");
}

#[test]
fn a_single_no_satisfies_the_scored_gate() {
    let catalog = Catalog::new(Weighting::Flat);
    let mut responses = ResponseSet::new(&catalog);
    responses.set(1, ResponseValue::No).unwrap();

    let record = assemble(&catalog, &valid_patient(), &responses, now()).unwrap();
    assert_eq!(record.grand_total, 0.0);
}

#[test]
fn assembled_record_is_complete_and_consistent() {
    let catalog = Catalog::new(Weighting::MonthEquivalent);
    let mut responses = ResponseSet::new(&catalog);
    responses.set(9, ResponseValue::Yes).unwrap(); // COM, 0.8
    responses.set(17, ResponseValue::Yes).unwrap(); // LOC, 0.8
    responses.set(20, ResponseValue::No).unwrap(); // SHD, not achieved

    let record = assemble(&catalog, &valid_patient(), &responses, now()).unwrap();

    assert_eq!(record.patient.child_name, "Asha");
    assert_eq!(record.assessment_timestamp, now());
    assert!(record.assessment_id.starts_with("VSMS-"));
    assert_eq!(record.assessment_id.len(), "VSMS-".len() + 6);

    assert_eq!(record.domain_totals.get(DomainCode::Com), 0.8);
    assert_eq!(record.domain_totals.get(DomainCode::Loc), 0.8);
    assert_eq!(record.domain_totals.get(DomainCode::Shd), 0.0);
    assert_eq!(record.grand_total, record.domain_totals.sum());

    // The record carries a full-catalog snapshot, not just touched items.
    assert_eq!(record.responses.len(), catalog.len());
    assert_eq!(record.responses.get(9), Some(ResponseValue::Yes));
    assert_eq!(record.responses.get(20), Some(ResponseValue::No));
    assert_eq!(record.responses.get(89), Some(ResponseValue::NotTested));
}

#[test]
fn same_inputs_assemble_to_the_same_record() {
    let catalog = Catalog::new(Weighting::Flat);
    let responses = one_scored_set(&catalog);

    let first = assemble(&catalog, &valid_patient(), &responses, now()).unwrap();
    let second = assemble(&catalog, &valid_patient(), &responses, now()).unwrap();
    assert_eq!(first, second);
}
