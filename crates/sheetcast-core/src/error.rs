//! Error types for sheetcast-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetcast-core
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Serial day offset does not land on a representable calendar date
    #[error("Date offset of {0} days is out of range")]
    DateOutOfRange(i64),
}
