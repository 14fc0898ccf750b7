use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::domain::DomainCode;
use super::patient::PatientInfo;
use super::response::ResponseSnapshot;

/// Accumulated weight of achieved items, one accumulator per domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub struct DomainTotals {
    pub shg: f64,
    pub she: f64,
    pub shd: f64,
    pub sd: f64,
    pub occ: f64,
    pub com: f64,
    pub loc: f64,
    pub soc: f64,
}

impl DomainTotals {
    pub fn get(&self, code: DomainCode) -> f64 {
        match code {
            DomainCode::Shg => self.shg,
            DomainCode::She => self.she,
            DomainCode::Shd => self.shd,
            DomainCode::Sd => self.sd,
            DomainCode::Occ => self.occ,
            DomainCode::Com => self.com,
            DomainCode::Loc => self.loc,
            DomainCode::Soc => self.soc,
        }
    }

    pub fn add(&mut self, code: DomainCode, weight: f64) {
        match code {
            DomainCode::Shg => self.shg += weight,
            DomainCode::She => self.she += weight,
            DomainCode::Shd => self.shd += weight,
            DomainCode::Sd => self.sd += weight,
            DomainCode::Occ => self.occ += weight,
            DomainCode::Com => self.com += weight,
            DomainCode::Loc => self.loc += weight,
            DomainCode::Soc => self.soc += weight,
        }
    }

    /// The eight accumulators in display order.
    pub fn iter(&self) -> impl Iterator<Item = (DomainCode, f64)> + '_ {
        DomainCode::ALL.iter().map(move |&code| (code, self.get(code)))
    }

    /// Sum of the eight accumulators. The grand total of a record is
    /// always this sum, never a separate re-scan of the items.
    pub fn sum(&self) -> f64 {
        DomainCode::ALL.iter().map(|&code| self.get(code)).sum()
    }
}

/// The immutable artifact of one completed assessment. Created only by
/// the assembler once every validation gate has passed; never mutated
/// afterwards. The archive and the report pipeline only read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentRecord {
    #[serde(flatten)]
    pub patient: PatientInfo,
    pub assessment_id: String,
    pub assessment_timestamp: jiff::Timestamp,
    pub responses: ResponseSnapshot,
    pub domain_totals: DomainTotals,
    pub grand_total: f64,
}
