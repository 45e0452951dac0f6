//! Serial date decoding

use chrono::Duration;
use sheetcast_core::{CellValue, DateSystem, SECONDS_PER_DAY};

use super::parse_float;
use crate::error::{ConvertError, ConvertResult};

/// Decode a serial date number.
///
/// The integral part counts days from the epoch of `date_system`. A zero
/// fractional part yields a [`CellValue::Date`]; otherwise the fraction is
/// rounded to whole seconds and the result is a UTC [`CellValue::DateTime`].
/// Date, time and date-time formats all decode the same way, since any of
/// them may or may not carry a time of day.
pub fn convert_date(raw: &str, date_system: DateSystem) -> ConvertResult<CellValue> {
    let serial = parse_float(raw)?;
    if !serial.is_finite() {
        return Err(ConvertError::DateOutOfRange(serial));
    }

    let days = serial.floor();
    let fraction = serial - days;
    let date = date_system.add_days(days as i64)?;

    if fraction > 0.0 {
        let seconds = (fraction * SECONDS_PER_DAY).round() as i64;
        date.and_hms_opt(0, 0, 0)
            .and_then(|midnight| midnight.checked_add_signed(Duration::seconds(seconds)))
            .map(|ts| CellValue::DateTime(ts.and_utc()))
            .ok_or(ConvertError::DateOutOfRange(serial))
    } else {
        Ok(CellValue::Date(date))
    }
}
