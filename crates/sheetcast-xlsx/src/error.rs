//! Conversion error types

use std::num::ParseFloatError;

use thiserror::Error;

/// Result type for conversion operations
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur while converting cell values or reading metadata
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Raw value is not an integer
    #[error("Invalid integer: {0:?}")]
    InvalidInteger(String),

    /// Raw value is not a number
    #[error("Invalid number {value:?}: {source}")]
    InvalidFloat {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    /// Raw value is not a decimal number
    #[error("Invalid decimal {value:?}: {source}")]
    InvalidDecimal {
        value: String,
        #[source]
        source: rust_decimal::Error,
    },

    /// Shared string index outside the table
    #[error("Shared string index {index} out of bounds (count: {count})")]
    SharedStringOutOfBounds { index: i64, count: usize },

    /// Date serial is not finite or lands outside the supported calendar
    #[error("Date serial {0} is out of range")]
    DateOutOfRange(f64),

    /// XML error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] sheetcast_core::Error),
}
