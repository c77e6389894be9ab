/// Errors from reading or writing the persisted profile
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Store(String),
}
