use thiserror::Error;

/// Failure kinds for store-backed tracker operations.
///
/// Callers on the page-render path absorb all of these; the typed split
/// exists so tests and the API layer can tell "not configured" apart from
/// "operation failed".
#[derive(Error, Debug)]
pub enum TrackingError {
    #[error("store is not configured")]
    StoreUnavailable,

    #[error("store operation failed: {0}")]
    StoreOperationFailed(#[from] sqlx::Error),

    #[error("store operation timed out after {0} seconds")]
    StoreTimeout(u64),
}
