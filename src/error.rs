//! Server error types

use axum::http::StatusCode;
use thiserror::Error;

/// Main server error type
#[derive(Debug, Error)]
pub enum ServerError {
    // ========== Lookup Errors ==========
    /// Referenced member does not exist
    #[error("member not found: {0}")]
    NotFound(i64),

    // ========== Forest Invariant Errors ==========
    /// Create/edit referenced a nonexistent parent
    #[error("parent not found: {0}")]
    ParentNotFound(i64),

    /// Proposed re-parent would create a cycle
    #[error("re-parenting member {member} under {parent} would create a cycle")]
    CycleDetected { member: i64, parent: i64 },

    /// Delete attempted on a member that still has children
    #[error("cannot delete member {id}: {children} children attached")]
    HasDependents { id: i64, children: usize },

    /// Lineage walk failed to terminate; a prior invariant breach
    #[error("structural corruption: {0}")]
    StructuralCorruption(String),

    // ========== Validation Errors ==========
    /// Missing required field or malformed value
    #[error("validation error: {0}")]
    Validation(String),

    /// Unsupported content type on an upload
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// Uploaded photo exceeds the size cap
    #[error("photo exceeds maximum size of {limit_bytes} bytes")]
    PhotoTooLarge { limit_bytes: usize },

    // ========== Authentication Errors ==========
    /// Mutating call without a valid admin credential
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    // ========== Storage Errors ==========
    /// Underlying storage I/O failure (safe to retry with backoff)
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// Storage operation failed (NOT NotFound - that becomes NotFound above)
    #[error("storage error: {0}")]
    Storage(StorageError),

    // ========== Server Errors ==========
    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Storage-specific errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database connection failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Data corruption detected
    #[error("data corruption: {0}")]
    Corruption(String),

    /// Member not found
    #[error("not found: member {0}")]
    NotFound(i64),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// SQLite database error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Server result type alias
pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ServerError::Validation(_) => StatusCode::BAD_REQUEST,

            // 401 Unauthorized
            ServerError::Unauthorized(_) => StatusCode::UNAUTHORIZED,

            // 404 Not Found
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,

            // 409 Conflict
            ServerError::CycleDetected { .. } | ServerError::HasDependents { .. } => {
                StatusCode::CONFLICT
            }

            // 413 Payload Too Large
            ServerError::PhotoTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,

            // 415 Unsupported Media Type
            ServerError::UnsupportedContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,

            // 422 Unprocessable Entity
            ServerError::ParentNotFound(_) => StatusCode::UNPROCESSABLE_ENTITY,

            // 503 Service Unavailable
            ServerError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            ServerError::StructuralCorruption(_)
            | ServerError::Storage(_)
            | ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for API response
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::NotFound(_) => "NOT_FOUND",
            ServerError::ParentNotFound(_) => "PARENT_NOT_FOUND",
            ServerError::CycleDetected { .. } => "CYCLE_DETECTED",
            ServerError::HasDependents { .. } => "HAS_DEPENDENTS",
            ServerError::StructuralCorruption(_) => "STRUCTURAL_CORRUPTION",
            ServerError::Validation(_) => "VALIDATION_ERROR",
            ServerError::UnsupportedContentType(_) => "UNSUPPORTED_CONTENT_TYPE",
            ServerError::PhotoTooLarge { .. } => "PHOTO_TOO_LARGE",
            ServerError::Unauthorized(_) => "UNAUTHORIZED",
            ServerError::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            ServerError::Storage(_) => "STORAGE_ERROR",
            ServerError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if error is recoverable (client can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ServerError::StoreUnavailable(_)
                | ServerError::Storage(StorageError::ConnectionFailed(_))
        )
    }
}

// Conversions from external errors

impl From<serde_json::Error> for ServerError {
    fn from(e: serde_json::Error) -> Self {
        ServerError::Validation(e.to_string())
    }
}

impl From<rusqlite::Error> for ServerError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::Sqlite(e).into()
    }
}

impl From<StorageError> for ServerError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound(id) => ServerError::NotFound(id),
            StorageError::ConnectionFailed(msg) => ServerError::StoreUnavailable(msg),
            StorageError::Sqlite(err) if is_busy(&err) => {
                ServerError::StoreUnavailable(err.to_string())
            }
            other => ServerError::Storage(other),
        }
    }
}

/// A busy/locked database is a transient condition, not a storage fault
fn is_busy(e: &rusqlite::Error) -> bool {
    matches!(
        e.sqlite_error_code(),
        Some(rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked)
    )
}
