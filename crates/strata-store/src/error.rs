use strata_types::TypeError;

/// Errors from object store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The sentinel reference denotes "no object" and cannot be fetched.
    #[error("attempted to access the sentinel reference")]
    SentinelReference,

    /// An object embeds the sentinel reference in its outgoing table.
    #[error("outgoing reference at index {index} is the sentinel reference")]
    SentinelOutgoingReference { index: usize },

    /// The object cannot be addressed (e.g. it is too large).
    #[error("invalid object: {0}")]
    InvalidObject(#[from] TypeError),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
