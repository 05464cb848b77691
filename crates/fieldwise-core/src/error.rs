//! Error types for fieldwise.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias using fieldwise's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fieldwise operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Fewer than two usable field values remained after filtering and
    /// ranking, so the mandatory title and content slots cannot be filled.
    /// A per-record failure: batch callers skip the record and continue.
    #[error("record {record_id} is not indexable: {usable} usable field value(s)")]
    NotIndexable { record_id: Uuid, usable: usize },
}
