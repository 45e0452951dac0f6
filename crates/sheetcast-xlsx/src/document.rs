//! Per-workbook conversion context

use std::sync::OnceLock;

use sheetcast_core::{CellValue, DateSystem};

use crate::convert::{convert, BignumMode, ConversionOptions, TypeTag};
use crate::error::ConvertResult;
use crate::styles::StyleTypes;
use crate::workbook::{resolve_date_system, WorkbookProperties};

/// The conversion state a sheet reader keeps for one workbook.
///
/// Owns the shared string table, workbook properties and style types read
/// from the package, plus the lazily resolved date system.
#[derive(Debug, Default)]
pub struct Document {
    shared_strings: Vec<String>,
    workbook: Option<WorkbookProperties>,
    styles: StyleTypes,
    bignum: BignumMode,
    date_system: OnceLock<DateSystem>,
}

impl Document {
    /// Create a document over a shared string table
    pub fn new(shared_strings: Vec<String>) -> Self {
        Self {
            shared_strings,
            ..Self::default()
        }
    }

    /// Attach workbook properties
    pub fn with_workbook(mut self, workbook: WorkbookProperties) -> Self {
        self.workbook = Some(workbook);
        self.date_system = OnceLock::new();
        self
    }

    /// Attach style types
    pub fn with_styles(mut self, styles: StyleTypes) -> Self {
        self.styles = styles;
        self
    }

    /// Choose how scientific-format values are represented
    pub fn with_bignum_mode(mut self, bignum: BignumMode) -> Self {
        self.bignum = bignum;
        self
    }

    /// Shared string table
    pub fn shared_strings(&self) -> &[String] {
        &self.shared_strings
    }

    /// Workbook properties, if any were attached
    pub fn workbook(&self) -> Option<&WorkbookProperties> {
        self.workbook.as_ref()
    }

    /// Style types
    pub fn styles(&self) -> &StyleTypes {
        &self.styles
    }

    /// Date system of the workbook, resolved on first access.
    ///
    /// Concurrent first calls may each resolve; all of them produce the same
    /// value and only one is stored.
    pub fn date_system(&self) -> DateSystem {
        *self.date_system.get_or_init(|| {
            let resolved = resolve_date_system(self.workbook.as_ref());
            log::debug!("resolved {} date system", resolved);
            resolved
        })
    }

    /// Conversion options borrowing this document's tables
    pub fn options(&self) -> ConversionOptions<'_> {
        ConversionOptions::new(&self.shared_strings)
            .with_date_system(self.date_system())
            .with_bignum(self.bignum)
    }

    /// Convert a cell from its raw `<v>` text, `t` attribute and `s` attribute
    pub fn convert_cell(
        &self,
        raw: Option<&str>,
        type_code: Option<&str>,
        xf_index: Option<u32>,
    ) -> ConvertResult<Option<CellValue>> {
        let explicit_type = type_code.map(|code| {
            let tag = TypeTag::from_type_code(code);
            if tag == TypeTag::Unrecognized {
                log::warn!("unrecognized cell type code {:?}, keeping raw value", code);
            }
            tag
        });
        let style = xf_index.and_then(|idx| self.styles.style_type(idx));
        let value = convert(raw, explicit_type, style, &self.options())?;
        if let Some(v) = &value {
            log::trace!("cell {:?} converted to {}", raw, v.type_name());
        }
        Ok(value)
    }
}
