//! # sheetcast-core
//!
//! Core types shared by the sheetcast conversion crates.
//!
//! - [`CellValue`] - A typed cell value (string, number, boolean, decimal, date, timestamp)
//! - [`DateSystem`] - The serial-date epoch a workbook uses (1900 or 1904)
//!
//! ## Example
//!
//! ```rust
//! use sheetcast_core::{CellValue, DateSystem};
//!
//! let date = DateSystem::Excel1900.add_days(45292).unwrap();
//! assert_eq!(date.to_string(), "2024-01-01");
//!
//! let value = CellValue::from(date);
//! assert!(value.is_temporal());
//! ```

pub mod date_system;
pub mod error;
pub mod value;

// Re-exports for convenience
pub use date_system::DateSystem;
pub use error::{Error, Result};
pub use value::CellValue;

pub use chrono;
pub use rust_decimal::Decimal;

/// Number of seconds in one serial day
pub const SECONDS_PER_DAY: f64 = 86_400.0;
