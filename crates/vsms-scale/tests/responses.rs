use vsms_core::models::response::ResponseValue;
use vsms_scale::catalog::{Catalog, Weighting};
use vsms_scale::error::ScaleError;
use vsms_scale::responses::ResponseSet;

fn catalog() -> Catalog {
    Catalog::new(Weighting::Flat)
}

#[test]
fn a_fresh_set_is_all_not_tested() {
    let catalog = catalog();
    let responses = ResponseSet::new(&catalog);

    assert_eq!(responses.len(), catalog.len());
    assert_eq!(responses.count_attempted(), 0);
    for item in catalog.all_items() {
        assert_eq!(responses.get(item.id), Some(ResponseValue::NotTested));
    }
}

#[test]
fn set_overwrites_without_history() {
    let catalog = catalog();
    let mut responses = ResponseSet::new(&catalog);

    responses.set(5, ResponseValue::Yes).unwrap();
    assert_eq!(responses.get(5), Some(ResponseValue::Yes));

    responses.set(5, ResponseValue::No).unwrap();
    assert_eq!(responses.get(5), Some(ResponseValue::No));
}

#[test]
fn unknown_item_ids_are_rejected() {
    let catalog = catalog();
    let mut responses = ResponseSet::new(&catalog);

    let err = responses.set(500, ResponseValue::Yes).unwrap_err();
    assert!(matches!(err, ScaleError::InvalidItemId(500)));
    assert_eq!(responses.get(500), None);
    // The failed write must not grow the set.
    assert_eq!(responses.len(), catalog.len());
}

#[test]
fn count_attempted_counts_no_as_attempted() {
    let catalog = catalog();
    let mut responses = ResponseSet::new(&catalog);

    responses.set(1, ResponseValue::No).unwrap();
    assert_eq!(responses.count_attempted(), 1);

    responses.set(2, ResponseValue::Yes).unwrap();
    assert_eq!(responses.count_attempted(), 2);

    responses.set(2, ResponseValue::NotTested).unwrap();
    assert_eq!(responses.count_attempted(), 1);
}

#[test]
fn snapshots_are_isolated_from_later_mutation() {
    let catalog = catalog();
    let mut responses = ResponseSet::new(&catalog);
    responses.set(3, ResponseValue::Yes).unwrap();

    let snapshot = responses.snapshot();
    responses.set(3, ResponseValue::No).unwrap();

    assert_eq!(snapshot.get(3), Some(ResponseValue::Yes));
    assert_eq!(responses.get(3), Some(ResponseValue::No));
}

#[test]
fn reset_returns_every_item_to_not_tested() {
    let catalog = catalog();
    let mut responses = ResponseSet::new(&catalog);
    responses.set(1, ResponseValue::Yes).unwrap();
    responses.set(89, ResponseValue::No).unwrap();

    responses.reset();

    assert_eq!(responses.count_attempted(), 0);
    for item in catalog.all_items() {
        assert_eq!(responses.get(item.id), Some(ResponseValue::NotTested));
    }
}
