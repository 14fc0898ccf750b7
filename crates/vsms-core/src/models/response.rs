use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A clinician's answer for one scale item. Every item starts out
/// `NotTested` and stays there until it is explicitly evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ResponseValue {
    Yes,
    No,
    #[default]
    NotTested,
}

impl ResponseValue {
    /// Whether this response counts toward the at-least-one-item gate.
    /// A NO is an attempted evaluation; only NOT TESTED is not.
    pub fn is_attempted(self) -> bool {
        !matches!(self, ResponseValue::NotTested)
    }

    /// Whether this response contributes the item's weight to the score.
    pub fn is_achieved(self) -> bool {
        matches!(self, ResponseValue::Yes)
    }
}

impl std::fmt::Display for ResponseValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ResponseValue::Yes => "YES",
            ResponseValue::No => "NO",
            ResponseValue::NotTested => "NOT TESTED",
        })
    }
}

/// An immutable copy of a response set at one point in time, keyed by
/// item id. This is what gets embedded in an assessment record and
/// serialized into the `responsesJSON` column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseSnapshot(pub BTreeMap<u32, ResponseValue>);

impl ResponseSnapshot {
    pub fn get(&self, item_id: u32) -> Option<ResponseValue> {
        self.0.get(&item_id).copied()
    }

    pub fn is_achieved(&self, item_id: u32) -> bool {
        self.get(item_id).is_some_and(ResponseValue::is_achieved)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in ascending item-id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, ResponseValue)> + '_ {
        self.0.iter().map(|(&id, &value)| (id, value))
    }
}
