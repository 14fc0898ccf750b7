use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

use super::domain::DomainCode;
use super::record::AssessmentRecord;

/// The canonical persisted projection of an [`AssessmentRecord`],
/// matching the spreadsheet column layout field for field. Rows fetched
/// from the endpoint in a legacy casing are normalized into this shape by
/// the store adapter; nothing else in the workspace deals with the loose
/// wire forms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StoredRecord {
    pub patient_id: String,
    pub child_name: String,
    pub dob: String,
    pub age: String,
    pub gender: String,
    pub assessment_date: String,
    pub therapist_name: String,
    pub assessment_id: String,
    #[serde(rename = "responsesJSON")]
    pub responses_json: String,
    #[serde(rename = "SHG_total")]
    pub shg_total: f64,
    #[serde(rename = "SHE_total")]
    pub she_total: f64,
    #[serde(rename = "SHD_total")]
    pub shd_total: f64,
    #[serde(rename = "SD_total")]
    pub sd_total: f64,
    #[serde(rename = "OCC_total")]
    pub occ_total: f64,
    #[serde(rename = "COM_total")]
    pub com_total: f64,
    #[serde(rename = "LOC_total")]
    pub loc_total: f64,
    #[serde(rename = "SOC_total")]
    pub soc_total: f64,
    pub grand_total: f64,
    /// Server-recorded insertion time; absent until the row is persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl StoredRecord {
    /// Project a finished record into the persisted column layout. The
    /// response snapshot is serialized into the `responsesJSON` column.
    pub fn from_record(record: &AssessmentRecord) -> Result<Self, CoreError> {
        let responses_json = serde_json::to_string(&record.responses)?;
        Ok(Self {
            patient_id: record.patient.patient_id.clone(),
            child_name: record.patient.child_name.clone(),
            dob: record.patient.dob.clone(),
            age: record.patient.age.clone(),
            gender: record.patient.gender.clone(),
            assessment_date: record.assessment_timestamp.to_string(),
            therapist_name: record.patient.therapist_name.clone(),
            assessment_id: record.assessment_id.clone(),
            responses_json,
            shg_total: record.domain_totals.shg,
            she_total: record.domain_totals.she,
            shd_total: record.domain_totals.shd,
            sd_total: record.domain_totals.sd,
            occ_total: record.domain_totals.occ,
            com_total: record.domain_totals.com,
            loc_total: record.domain_totals.loc,
            soc_total: record.domain_totals.soc,
            grand_total: record.grand_total,
            timestamp: None,
        })
    }

    /// The stored total for one domain column.
    pub fn domain_total(&self, code: DomainCode) -> f64 {
        match code {
            DomainCode::Shg => self.shg_total,
            DomainCode::She => self.she_total,
            DomainCode::Shd => self.shd_total,
            DomainCode::Sd => self.sd_total,
            DomainCode::Occ => self.occ_total,
            DomainCode::Com => self.com_total,
            DomainCode::Loc => self.loc_total,
            DomainCode::Soc => self.soc_total,
        }
    }
}
