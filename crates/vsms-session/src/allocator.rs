//! Sequential patient identifier allocation.

/// Prefix of every allocator-issued patient id.
pub const PATIENT_ID_PREFIX: &str = "VIN";

/// The first id issued into an empty archive is `VIN100`.
pub const PATIENT_ID_BASE: u64 = 100;

/// Derive the next sequential patient id from the ids already issued.
///
/// A pure function of the collection: no I/O, no state of its own. Ids
/// that do not match the prefix followed by plain digits are silently
/// ignored, and duplicates cannot double-advance the counter. The caller
/// must re-run this against the latest fetched collection whenever that
/// collection changes; two clients allocating from the same stale
/// collection can issue the same id, an accepted limitation of the
/// single-clinician deployment that is not closed here.
pub fn next_patient_id<I>(existing: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let max = existing
        .into_iter()
        .filter_map(|id| id_suffix(id.as_ref()))
        .max();

    match max {
        Some(n) => format!("{PATIENT_ID_PREFIX}{}", n + 1),
        None => format!("{PATIENT_ID_PREFIX}{PATIENT_ID_BASE}"),
    }
}

/// The numeric suffix of a well-formed id. Zero-padded suffixes and ids
/// with extra characters do not participate.
fn id_suffix(id: &str) -> Option<u64> {
    let digits = id.strip_prefix(PATIENT_ID_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    digits.parse().ok()
}
