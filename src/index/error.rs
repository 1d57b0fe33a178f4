use thiserror::Error;

use crate::file::{BufferError, FileError};

/// Result type for index operations
pub type IndexResult<T> = Result<T, IndexError>;

/// Errors that can occur during index operations
#[derive(Debug, Error)]
pub enum IndexError {
    #[error(transparent)]
    Buffer(#[from] BufferError),

    #[error("File error: {0}")]
    File(#[from] FileError),

    #[error("Index metadata mismatch: {0}")]
    BadIndexInfo(String),

    #[error("Scan operators must be GT/GTE for the low bound and LT/LTE for the high bound")]
    BadOpcodes,

    #[error("Scan range is empty: low value exceeds high value")]
    BadScanrange,

    #[error("No key in the index satisfies the scan criteria")]
    NoSuchKeyFound,

    #[error("No scan is in progress")]
    ScanNotInitialized,

    #[error("The scan has returned every matching entry")]
    IndexScanCompleted,

    #[error("Leaf split requested on a leaf that is not full")]
    LeafNodeNotFull,

    #[error("Internal-node split requested on a node that is not full")]
    NonLeafNodeNotFull,
}
