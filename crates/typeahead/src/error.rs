//! Error types for the typeahead control.

use thiserror::Error;

/// Errors surfaced by the checked field operations.
///
/// The failure taxonomy is narrow: this is presentation logic over an
/// in-memory list. A desynchronized row index is a host contract violation;
/// the unchecked [`pick_result`](crate::AutocompleteField::pick_result)
/// asserts instead of returning this.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A pick referenced a row outside the current result list.
    #[error("picked row {index} out of range (result list has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },
}

/// Result type for checked field operations.
pub type FieldResult<T> = Result<T, FieldError>;
