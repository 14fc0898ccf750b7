use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The stored `responsesJSON` column failed to parse. The listing
    /// and regeneration paths degrade to an empty response set instead
    /// of aborting; this strict form exists for callers that want to
    /// know.
    #[error("malformed stored responses: {0}")]
    MalformedResponses(#[from] serde_json::Error),
}
