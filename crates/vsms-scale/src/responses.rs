use std::collections::BTreeMap;

use vsms_core::models::response::{ResponseSnapshot, ResponseValue};

use crate::catalog::Catalog;
use crate::error::ScaleError;

/// The mutable per-assessment state: exactly one response per catalog
/// item, never sparse. Owned and mutated by a single active session.
#[derive(Debug, Clone)]
pub struct ResponseSet {
    values: BTreeMap<u32, ResponseValue>,
}

impl ResponseSet {
    /// Every catalog item starts at NOT TESTED.
    pub fn new(catalog: &Catalog) -> Self {
        let values = catalog
            .all_items()
            .map(|item| (item.id, ResponseValue::NotTested))
            .collect();
        Self { values }
    }

    /// Overwrite the response for one item. No history is retained.
    pub fn set(&mut self, item_id: u32, value: ResponseValue) -> Result<(), ScaleError> {
        match self.values.get_mut(&item_id) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ScaleError::InvalidItemId(item_id)),
        }
    }

    pub fn get(&self, item_id: u32) -> Option<ResponseValue> {
        self.values.get(&item_id).copied()
    }

    /// Number of items evaluated as YES or NO. Drives the
    /// at-least-one-item submission gate; a NO counts.
    pub fn count_attempted(&self) -> usize {
        self.values
            .values()
            .filter(|value| value.is_attempted())
            .count()
    }

    /// Immutable copy for embedding into an assessment record. Later
    /// mutation of this set does not affect snapshots already taken.
    pub fn snapshot(&self) -> ResponseSnapshot {
        ResponseSnapshot(self.values.clone())
    }

    /// Back to all NOT TESTED, ready for the next case.
    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            *value = ResponseValue::NotTested;
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
