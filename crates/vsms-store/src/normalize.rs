//! Normalization of loose endpoint rows into the canonical
//! [`StoredRecord`] shape. Older sheet snapshots used underscored
//! casings (`Patient_ID`, `Vineland_Data_JSON`, `SHG_Total`) and numeric
//! strings; everything is folded into one strict shape here so the core
//! types stay non-optional.

use serde_json::Value;
use tracing::warn;

use vsms_core::models::stored::StoredRecord;

fn text(row: &Value, keys: &[&str]) -> String {
    for key in keys {
        match row.get(key) {
            Some(Value::String(s)) => return s.clone(),
            Some(Value::Number(n)) => return n.to_string(),
            _ => {}
        }
    }
    String::new()
}

fn number(row: &Value, keys: &[&str]) -> f64 {
    for key in keys {
        match row.get(key) {
            Some(Value::Number(n)) => return n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => {
                if let Ok(parsed) = s.trim().parse::<f64>() {
                    return parsed;
                }
            }
            _ => {}
        }
    }
    0.0
}

fn optional_text(row: &Value, keys: &[&str]) -> Option<String> {
    let value = text(row, keys);
    (!value.is_empty()).then_some(value)
}

/// Convert a fetched payload into records. Anything that is not a JSON
/// array yields an empty archive; rows that are not objects are skipped.
pub fn records_from_value(value: &Value) -> Vec<StoredRecord> {
    let Some(rows) = value.as_array() else {
        if !value.is_null() {
            warn!("archive payload is not an array, treating as empty");
        }
        return Vec::new();
    };

    rows.iter().filter_map(record_from_row).collect()
}

fn record_from_row(row: &Value) -> Option<StoredRecord> {
    if !row.is_object() {
        return None;
    }

    Some(StoredRecord {
        patient_id: text(row, &["patientId", "Patient_ID"]),
        child_name: text(row, &["childName", "Child_Name"]),
        dob: text(row, &["dob", "DOB"]),
        age: text(row, &["age", "Age"]),
        gender: text(row, &["gender", "Gender"]),
        assessment_date: text(row, &["assessmentDate", "Assessment_Date"]),
        therapist_name: text(row, &["therapistName", "Therapist_Name"]),
        assessment_id: text(row, &["assessmentId", "Assessment_ID"]),
        responses_json: text(row, &["responsesJSON", "Vineland_Data_JSON"]),
        shg_total: number(row, &["SHG_total", "SHG_Total"]),
        she_total: number(row, &["SHE_total", "SHE_Total"]),
        shd_total: number(row, &["SHD_total", "SHD_Total"]),
        sd_total: number(row, &["SD_total", "SD_Total"]),
        occ_total: number(row, &["OCC_total", "OCC_Total"]),
        com_total: number(row, &["COM_total", "COM_Total"]),
        loc_total: number(row, &["LOC_total", "LOC_Total"]),
        soc_total: number(row, &["SOC_total", "SOC_Total"]),
        grand_total: number(row, &["grandTotal", "Grand_Total"]),
        timestamp: optional_text(row, &["timestamp", "Timestamp"]),
    })
}
