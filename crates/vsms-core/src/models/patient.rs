use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Whether the patient is newly registered (ID comes from the allocator)
/// or returning (ID entered by the clinician).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PatientType {
    #[default]
    New,
    Existing,
}

/// Patient demographics collected in the entry form. Only `child_name`,
/// `therapist_name` and `patient_id` are required at submission time; the
/// assembler enforces that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientInfo {
    pub child_name: String,
    pub dob: String,
    pub age: String,
    pub gender: String,
    pub age_level: String,
    pub patient_type: PatientType,
    pub patient_id: String,
    pub therapist_name: String,
}

impl PatientInfo {
    /// Clear the identity fields after a successful submission. The
    /// patient type, selected age level and therapist carry over so the
    /// clinician can start the next case without re-selecting context.
    pub fn clear_identity(&mut self) {
        self.child_name.clear();
        self.dob.clear();
        self.age.clear();
        self.gender.clear();
        self.patient_id.clear();
    }
}
