use vsms_session::allocator::next_patient_id;

#[test]
fn empty_archive_starts_at_the_base() {
    assert_eq!(next_patient_id(Vec::<String>::new()), "VIN100");
}

#[test]
fn next_id_is_max_plus_one() {
    assert_eq!(next_patient_id(["VIN100", "VIN101", "VIN103"]), "VIN104");
}

#[test]
fn gaps_are_not_backfilled() {
    // VIN101 was skipped; the allocator never reuses it.
    assert_eq!(next_patient_id(["VIN100", "VIN102"]), "VIN103");
}

#[test]
fn duplicates_do_not_double_advance() {
    assert_eq!(next_patient_id(["VIN100", "VIN100"]), "VIN101");
}

#[test]
fn non_matching_ids_are_ignored() {
    assert_eq!(next_patient_id(["ABC1", "VIN1x"]), "VIN100");
    assert_eq!(next_patient_id(["vin100", "VIN-100", "VIN 100"]), "VIN100");
}

#[test]
fn zero_padded_suffixes_do_not_participate() {
    assert_eq!(next_patient_id(["VIN007"]), "VIN100");
    assert_eq!(next_patient_id(["VIN007", "VIN100"]), "VIN101");
}

#[test]
fn mixed_collections_only_count_well_formed_ids() {
    let ids = ["VIN100", "PATIENT-9", "VIN205", "", "VIN101"];
    assert_eq!(next_patient_id(ids), "VIN206");
}

#[test]
fn allocation_is_pure() {
    let ids = vec!["VIN100".to_string(), "VIN150".to_string()];
    assert_eq!(next_patient_id(&ids), next_patient_id(&ids));
}
