//! Scientific-format values


use rust_decimal::Decimal;
use sheetcast_core::CellValue;

use super::parse_float;
use crate::error::{ConvertError, ConvertResult};

/// Representation of values in scientific number formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BignumMode {
    /// Exact [`Decimal`], falling back to `f64` only past Decimal's 96-bit range
    #[default]
    Exact,
    /// Always `f64`
    Float,
}

/// Convert a scientific-format value according to `mode`.
pub fn convert_bignum(raw: &str, mode: BignumMode) -> ConvertResult<CellValue> {
    match mode {
        BignumMode::Float => Ok(CellValue::Float(parse_float(raw)?)),
        BignumMode::Exact => match parse_decimal(raw) {
            Ok(d) => Ok(CellValue::Decimal(d)),
            Err(source) => match raw.trim().parse::<f64>() {
                // Well-formed but too large or too precise for Decimal
                Ok(f) if f.is_finite() => {
                    log::debug!("{:?} exceeds decimal range, using f64: {}", raw, source);
                    Ok(CellValue::Float(f))
                }
                _ => Err(ConvertError::InvalidDecimal {
                    value: raw.to_string(),
                    source,
                }),
            },
        },
    }
}

fn parse_decimal(raw: &str) -> Result<Decimal, rust_decimal::Error> {
    let trimmed = raw.trim();
    if trimmed.contains(['e', 'E']) {
        Decimal::from_scientific(trimmed)
    } else {
        Decimal::from_str_exact(trimmed)
    }
}
