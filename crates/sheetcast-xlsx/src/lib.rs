//! # sheetcast-xlsx
//!
//! Cell value conversion for XLSX (Office Open XML) readers.
//!
//! A streaming sheet reader hands each cell's raw `<v>` text, its `t`
//! attribute and its style index to [`convert`] (or to
//! [`Document::convert_cell`]), which returns a typed
//! [`CellValue`](sheetcast_core::CellValue).
//!
//! ## Example
//!
//! ```rust
//! use sheetcast_xlsx::{Document, WorkbookProperties};
//! use sheetcast_core::CellValue;
//!
//! let doc = Document::new(vec!["apple".into(), "pear".into()])
//!     .with_workbook(WorkbookProperties::with_date1904("1"));
//!
//! let value = doc.convert_cell(Some("1"), Some("s"), None).unwrap();
//! assert_eq!(value, Some(CellValue::string("pear")));
//! assert_eq!(doc.date_system().year(), 1904);
//! ```

pub mod convert;
pub mod document;
pub mod error;
pub mod styles;
pub mod workbook;

pub use convert::{convert, BignumMode, ConversionOptions, TypeTag};
pub use document::Document;
pub use error::{ConvertError, ConvertResult};
pub use styles::StyleTypes;
pub use workbook::{resolve_date_system, WorkbookProperties};
