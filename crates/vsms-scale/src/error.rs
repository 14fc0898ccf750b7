use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaleError {
    /// The item id is not part of the fixed catalog. The entry form can
    /// never produce this; it flags an integration defect upstream.
    #[error("invalid item id: {0}")]
    InvalidItemId(u32),
}
