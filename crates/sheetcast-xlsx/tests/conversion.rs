//! Conversion behaviour of `convert` across type codes and styles.

use chrono::{NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rust_decimal::Decimal;
use sheetcast_core::{CellValue, DateSystem};
use sheetcast_xlsx::convert::{convert_bignum, convert_date};
use sheetcast_xlsx::{convert, BignumMode, ConversionOptions, ConvertError, TypeTag};

fn table() -> Vec<String> {
    vec!["a".to_string(), "b".to_string(), "c".to_string()]
}

// `<v>` holds a zero-based index into sharedStrings.xml (ECMA-376 §18.4)
#[test]
fn test_shared_string_lookup_is_zero_based() {
    let strings = table();
    let opts = ConversionOptions::new(&strings);

    let value = convert(Some("2"), Some(TypeTag::SharedStringRef), None, &opts).unwrap();
    assert_eq!(value, Some(CellValue::string("c")));

    let value = convert(Some("0"), Some(TypeTag::SharedStringRef), None, &opts).unwrap();
    assert_eq!(value, Some(CellValue::string("a")));
}

#[test]
fn test_shared_string_out_of_bounds_is_error() {
    let strings = table();
    let opts = ConversionOptions::new(&strings);

    let err = convert(Some("3"), Some(TypeTag::SharedStringRef), None, &opts).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::SharedStringOutOfBounds { index: 3, count: 3 }
    ));
    assert_eq!(
        err.to_string(),
        "Shared string index 3 out of bounds (count: 3)"
    );
}

#[test]
fn test_booleans() {
    let opts = ConversionOptions::default();
    let b = |raw| convert(Some(raw), Some(TypeTag::Boolean), None, &opts).unwrap();

    assert_eq!(b("1"), Some(CellValue::Boolean(true)));
    assert_eq!(b("0"), Some(CellValue::Boolean(false)));
    assert_eq!(b("2"), Some(CellValue::Boolean(false)));
    assert!(convert(Some("true"), Some(TypeTag::Boolean), None, &opts).is_err());
}

#[test]
fn test_numbers() {
    let opts = ConversionOptions::default();

    assert_eq!(
        convert(Some("3.5"), Some(TypeTag::Number), None, &opts).unwrap(),
        Some(CellValue::Float(3.5))
    );
    assert_eq!(
        convert(Some("-1E2"), Some(TypeTag::Number), Some(TypeTag::StyleFixnum), &opts).unwrap(),
        Some(CellValue::Float(-100.0))
    );
    assert!(matches!(
        convert(Some("abc"), Some(TypeTag::Number), None, &opts),
        Err(ConvertError::InvalidFloat { .. })
    ));
}

#[test]
fn test_integer_style_out_of_range_is_error() {
    let opts = ConversionOptions::default();
    for raw in ["9223372036854775808", "1e30"] {
        assert!(
            matches!(
                convert(Some(raw), None, Some(TypeTag::StyleFixnum), &opts),
                Err(ConvertError::InvalidInteger(_))
            ),
            "{raw:?} should not convert"
        );
    }
    assert_eq!(
        convert(Some("9223372036854775807"), None, Some(TypeTag::StyleFixnum), &opts).unwrap(),
        Some(CellValue::Integer(i64::MAX))
    );
}

#[test]
fn test_strings_pass_through() {
    let opts = ConversionOptions::default();
    for tag in [
        TypeTag::Str,
        TypeTag::InlineStr,
        TypeTag::StyleString,
        TypeTag::StyleUnsupported,
        TypeTag::Unrecognized,
    ] {
        assert_eq!(
            convert(Some(" 0042 "), Some(tag), None, &opts).unwrap(),
            Some(CellValue::string(" 0042 ")),
            "tag {tag:?}"
        );
    }
}

#[test]
fn test_style_typed_values() {
    let opts = ConversionOptions::default();

    assert_eq!(
        convert(Some("50"), None, Some(TypeTag::StylePercentage), &opts).unwrap(),
        Some(CellValue::Float(0.5))
    );
    assert_eq!(
        convert(Some("17"), None, Some(TypeTag::StyleFixnum), &opts).unwrap(),
        Some(CellValue::Integer(17))
    );
    assert_eq!(
        convert(Some("0.1"), None, Some(TypeTag::StyleFloat), &opts).unwrap(),
        Some(CellValue::Float(0.1))
    );
    assert_eq!(
        convert(Some("text"), None, Some(TypeTag::StyleString), &opts).unwrap(),
        Some(CellValue::string("text"))
    );
}

#[test]
fn test_date_style_overrides_number() {
    let opts = ConversionOptions::default();

    for style in [TypeTag::StyleDate, TypeTag::StyleTime, TypeTag::StyleDateTime] {
        let value = convert(Some("5"), Some(TypeTag::Number), Some(style), &opts).unwrap();
        assert_eq!(
            value,
            Some(CellValue::Date(NaiveDate::from_ymd_opt(1900, 1, 4).unwrap())),
            "style {style:?}"
        );
    }

    // Non-date styles leave t="n" alone
    let value = convert(
        Some("5"),
        Some(TypeTag::Number),
        Some(TypeTag::StylePercentage),
        &opts,
    )
    .unwrap();
    assert_eq!(value, Some(CellValue::Float(5.0)));
}

#[test]
fn test_date_system_from_options() {
    let opts = ConversionOptions::default().with_date_system(DateSystem::Excel1904);
    let value = convert(Some("0"), None, Some(TypeTag::StyleDate), &opts).unwrap();
    assert_eq!(
        value,
        Some(CellValue::Date(NaiveDate::from_ymd_opt(1904, 1, 1).unwrap()))
    );
}

#[test]
fn test_date_decoder_examples() {
    assert_eq!(
        convert_date("0", DateSystem::Excel1900).unwrap(),
        CellValue::Date(NaiveDate::from_ymd_opt(1899, 12, 30).unwrap())
    );
    assert_eq!(
        convert_date("1.5", DateSystem::Excel1900).unwrap(),
        CellValue::DateTime(Utc.with_ymd_and_hms(1899, 12, 31, 12, 0, 0).unwrap())
    );
}

#[test]
fn test_bignum_modes() {
    let exact = ConversionOptions::default();
    let lossy = ConversionOptions::default().with_bignum(BignumMode::Float);
    let raw = "12345678901234567890.5";

    let value = convert(Some(raw), None, Some(TypeTag::StyleBignum), &exact)
        .unwrap()
        .unwrap();
    assert_eq!(value.as_decimal(), Some(raw.parse::<Decimal>().unwrap()));
    assert_eq!(value.to_string(), raw);

    let value = convert(Some(raw), None, Some(TypeTag::StyleBignum), &lossy)
        .unwrap()
        .unwrap();
    assert_eq!(value, CellValue::Float(1.2345678901234567e19));
    assert_eq!(convert_bignum(raw, BignumMode::Float).unwrap(), value);
}

fn any_tag() -> impl Strategy<Value = Option<TypeTag>> {
    proptest::option::of(proptest::sample::select(TypeTag::ALL.to_vec()))
}

proptest! {
    #[test]
    fn prop_empty_values_are_none(explicit in any_tag(), style in any_tag(), is_1904 in any::<bool>()) {
        let strings: Vec<String> = Vec::new();
        let ds = if is_1904 { DateSystem::Excel1904 } else { DateSystem::Excel1900 };
        let opts = ConversionOptions::new(&strings).with_date_system(ds);

        prop_assert_eq!(convert(None, explicit, style, &opts).unwrap(), None);
        prop_assert_eq!(convert(Some(""), explicit, style, &opts).unwrap(), None);
    }

    #[test]
    fn prop_whole_serials_are_dates(serial in 0i64..2_958_465) {
        let value = convert_date(&serial.to_string(), DateSystem::Excel1900).unwrap();
        let date = value.as_date().unwrap();
        prop_assert!(value.as_datetime().is_none());
        prop_assert_eq!((date - DateSystem::Excel1900.base_date()).num_days(), serial);
    }

    #[test]
    fn prop_fractional_serials_keep_their_day(days in 0i64..100_000, secs in 1u32..86_399) {
        let serial = days as f64 + f64::from(secs) / 86_400.0;
        let value = convert_date(&serial.to_string(), DateSystem::Excel1904).unwrap();
        let ts = value.as_datetime().unwrap();
        prop_assert_eq!(ts.date_naive(), DateSystem::Excel1904.add_days(days).unwrap());
        prop_assert_eq!(chrono::Timelike::num_seconds_from_midnight(&ts), secs);
    }
}
