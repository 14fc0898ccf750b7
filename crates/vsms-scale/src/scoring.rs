use serde::{Deserialize, Serialize};
use ts_rs::TS;

use vsms_core::models::record::DomainTotals;
use vsms_core::models::response::ResponseSnapshot;

use crate::catalog::Catalog;

/// The output of one scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoreSummary {
    pub domain_totals: DomainTotals,
    pub grand_total: f64,
}

/// Score a response snapshot against the catalog.
///
/// Pure and total: walks the catalog once, adding each YES item's weight
/// to its domain accumulator. NO and NOT TESTED contribute nothing. The
/// grand total is the sum of the eight accumulators, so
/// `grand_total == domain_totals.sum()` holds by construction. Weights
/// are tenths at most, which keeps `f64` accumulation error far below the
/// one-decimal display precision.
pub fn score(catalog: &Catalog, snapshot: &ResponseSnapshot) -> ScoreSummary {
    let mut domain_totals = DomainTotals::default();
    for item in catalog.all_items() {
        if snapshot.is_achieved(item.id) {
            domain_totals.add(item.domain, item.weight);
        }
    }

    ScoreSummary {
        grand_total: domain_totals.sum(),
        domain_totals,
    }
}
