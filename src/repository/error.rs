// ==========================================
// Bakery Operations Core - store layer error types
// ==========================================
// Tool: thiserror derive macro
// ==========================================

use thiserror::Error;

/// Store layer error type
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("record not found: {entity} with id={id}")]
    NotFound { entity: String, id: String },

    #[error("store lock poisoned: {entity}")]
    LockPoisoned { entity: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias
pub type StoreResult<T> = Result<T, StoreError>;
