//! Raw cell text to typed value conversion
//!
//! The cell's explicit `t` code normally decides the conversion. Dates are
//! stored as plain numbers, so a date, time or date-time number format
//! overrides a generic `t="n"`; cells with no `t` code at all are typed
//! entirely by their style.

mod bignum;
mod date;
mod tag;

pub use bignum::{convert_bignum, BignumMode};
pub use date::convert_date;
pub use tag::TypeTag;

use sheetcast_core::{CellValue, DateSystem};

use crate::error::{ConvertError, ConvertResult};

/// Per-document inputs to [`convert`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionOptions<'a> {
    /// Shared string table (`xl/sharedStrings.xml`), indexed from 0
    pub shared_strings: &'a [String],
    /// Epoch for date-styled cells
    pub date_system: DateSystem,
    /// How scientific-format cells are represented
    pub bignum: BignumMode,
}

impl<'a> ConversionOptions<'a> {
    /// Options over a shared string table, with default date system and bignum mode
    pub fn new(shared_strings: &'a [String]) -> Self {
        Self {
            shared_strings,
            ..Self::default()
        }
    }

    /// Set the date system
    pub fn with_date_system(mut self, date_system: DateSystem) -> Self {
        self.date_system = date_system;
        self
    }

    /// Set the bignum mode
    pub fn with_bignum(mut self, bignum: BignumMode) -> Self {
        self.bignum = bignum;
        self
    }
}

/// Convert one raw cell value.
///
/// Returns `Ok(None)` for an absent or empty value regardless of the tags.
/// Tags with no conversion of their own hand back the raw text. Only numeric
/// text that fails to parse and shared string indexes outside the table are
/// errors.
pub fn convert(
    raw: Option<&str>,
    explicit_type: Option<TypeTag>,
    style: Option<TypeTag>,
    options: &ConversionOptions<'_>,
) -> ConvertResult<Option<CellValue>> {
    let raw = match raw {
        Some(v) if !v.is_empty() => v,
        _ => return Ok(None),
    };

    let tag = match effective_type(explicit_type, style) {
        Some(tag) => tag,
        None => return Ok(Some(CellValue::string(raw))),
    };

    let value = match tag {
        TypeTag::SharedStringRef => shared_string(raw, options.shared_strings)?,
        TypeTag::Number | TypeTag::StyleFloat => CellValue::Float(parse_float(raw)?),
        TypeTag::Boolean => CellValue::Boolean(parse_integer(raw)? == 1),
        TypeTag::StyleFixnum => CellValue::Integer(parse_integer(raw)?),
        TypeTag::StylePercentage => CellValue::Float(parse_float(raw)? / 100.0),
        TypeTag::StyleDate | TypeTag::StyleTime | TypeTag::StyleDateTime => {
            convert_date(raw, options.date_system)?
        }
        TypeTag::StyleBignum => convert_bignum(raw, options.bignum)?,
        TypeTag::Str
        | TypeTag::InlineStr
        | TypeTag::StyleString
        | TypeTag::StyleUnsupported
        | TypeTag::Unrecognized => CellValue::string(raw),
    };

    Ok(Some(value))
}

/// Pick the tag that decides the conversion
fn effective_type(explicit_type: Option<TypeTag>, style: Option<TypeTag>) -> Option<TypeTag> {
    match explicit_type {
        None => style,
        Some(TypeTag::Number) if style.is_some_and(TypeTag::is_date_style) => {
            log::trace!("number cell typed by date style {:?}", style);
            style
        }
        explicit => explicit,
    }
}

fn shared_string(raw: &str, table: &[String]) -> ConvertResult<CellValue> {
    let index = parse_integer(raw)?;
    usize::try_from(index)
        .ok()
        .and_then(|i| table.get(i))
        .map(|s| CellValue::string(s.as_str()))
        .ok_or_else(|| {
            log::warn!(
                "shared string index {} out of bounds ({} strings)",
                index,
                table.len()
            );
            ConvertError::SharedStringOutOfBounds {
                index,
                count: table.len(),
            }
        })
}

/// Parse a whole number. Fractional text is truncated toward zero, so
/// `"2.9999999999999996"` written for an integer-formatted cell reads as 2.
/// Values outside the `i64` range are errors.
pub(crate) fn parse_integer(raw: &str) -> ConvertResult<i64> {
    // 2^63; `i64::MAX as f64` rounds up to this
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(n);
    }
    match trimmed.parse::<f64>().map(f64::trunc) {
        Ok(f) if (-LIMIT..LIMIT).contains(&f) => Ok(f as i64),
        _ => Err(ConvertError::InvalidInteger(raw.to_string())),
    }
}

pub(crate) fn parse_float(raw: &str) -> ConvertResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|source| ConvertError::InvalidFloat {
            value: raw.to_string(),
            source,
        })
}
