use vsms_core::models::stored::StoredRecord;

/// Which field the history search matches against. A name search never
/// matches patient-id content and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    PatientId,
    Name,
}

/// Filter the archive by case-insensitive substring on the selected
/// field. An empty or whitespace term yields nothing, so the full
/// archive is never dumped by accident. Result order is the input order.
pub fn search<'a>(
    records: &'a [StoredRecord],
    mode: SearchMode,
    term: &str,
) -> Vec<&'a StoredRecord> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .filter(|record| {
            let field = match mode {
                SearchMode::PatientId => &record.patient_id,
                SearchMode::Name => &record.child_name,
            };
            field.to_lowercase().contains(&term)
        })
        .collect()
}
