#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A model document failed to encode or to pass the strict decode.
    #[error("Invalid model JSON: {0}")]
    Json(#[from] serde_json::Error),
}
