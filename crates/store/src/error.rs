#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored model is not a valid document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Stored model has no usable version field")]
    MissingVersion,

    #[error("Unsupported stored model version {found}")]
    UnsupportedVersion { found: u64 },
}
