use strata_store::StoreError;
use strata_types::ObjectReference;
use thiserror::Error;

/// Errors from decoding the raw descriptor sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("truncated varint at offset {offset}")]
    TruncatedVarint { offset: usize },

    #[error("varint at offset {offset} exceeds 64 bits")]
    VarintOverflow { offset: usize },

    #[error("reference index {value} at offset {offset} exceeds 32 bits")]
    IndexTooLarge { offset: usize, value: u64 },
}

/// Errors from resolving a local reference into an absolute one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlattenError {
    #[error("no reference provided")]
    MissingReference,

    #[error("reference index {index} is outside expected range [1, {degree}]")]
    IndexOutOfRange { index: u32, degree: usize },
}

/// Errors from decoding a file contents list.
///
/// None of these are transient: the object is invalid and retrying the
/// decode on the same bytes yields the same error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentsError {
    #[error("file contents list contains {count} parts, while at least two are required")]
    TooFewParts { count: usize },

    #[error("part at index {index} does not contain any data")]
    EmptyPart { index: usize },

    #[error("combined size of parts up to index {index} exceeds maximum file size of {max} bytes")]
    SizeOverflow { index: usize, max: u64 },

    #[error("invalid reference for part at index {index}: {source}")]
    InvalidPartReference {
        index: usize,
        #[source]
        source: FlattenError,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl ContentsError {
    /// Returns `true` for violations of the list's structural invariants,
    /// as opposed to failures of reference resolution or decoding.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::TooFewParts { .. } | Self::EmptyPart { .. } | Self::SizeOverflow { .. }
        )
    }
}

/// Errors from reading file contents.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("offset {offset} is past the end of a file of {size} bytes")]
    PastEndOfFile { offset: u64, size: u64 },

    #[error("file contents nested deeper than {max_depth} lists")]
    DepthExceeded { max_depth: u32 },

    #[error("part is expected to be {expected} bytes, but its object provides {actual} bytes")]
    SizeMismatch { expected: u64, actual: u64 },

    #[error("object backing part not found: {0}")]
    NotFound(ObjectReference),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("invalid file contents list: {0}")]
    Contents(#[from] ContentsError),
}

/// Result alias for read operations.
pub type ReadResult<T> = Result<T, ReadError>;
