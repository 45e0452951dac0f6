//! Style-driven type inference (styles.xml)
//!
//! Cells without a `t` attribute, and numbers with a date format, are typed by
//! the number format of their cell style. This module maps each `cellXfs`
//! entry to the [`TypeTag`] its number format implies.

use std::collections::HashMap;
use std::sync::OnceLock;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use regex::Regex;

use crate::convert::TypeTag;
use crate::error::ConvertResult;

/// First number format id available to custom formats
pub const FIRST_CUSTOM_FORMAT_ID: u32 = 164;

/// Tag implied by a built-in number format id
pub fn builtin_style_type(num_fmt_id: u32) -> Option<TypeTag> {
    let tag = match num_fmt_id {
        // General
        0 => TypeTag::StyleUnsupported,
        // 0
        1 => TypeTag::StyleFixnum,
        // 0.00
        2 => TypeTag::StyleFloat,
        // #,##0 / #,##0.00 / currency
        3..=8 => TypeTag::StyleUnsupported,
        // 0% / 0.00%
        9 | 10 => TypeTag::StylePercentage,
        // 0.00E+00
        11 => TypeTag::StyleBignum,
        // fractions
        12 | 13 => TypeTag::StyleUnsupported,
        // mm-dd-yy, d-mmm-yy, d-mmm, mmm-yy
        14..=17 => TypeTag::StyleDate,
        // h:mm AM/PM, h:mm:ss AM/PM, h:mm, h:mm:ss
        18..=21 => TypeTag::StyleTime,
        // m/d/yy h:mm
        22 => TypeTag::StyleDateTime,
        // accounting
        37..=40 => TypeTag::StyleUnsupported,
        // mm:ss, [h]:mm:ss, mmss.0
        45..=47 => TypeTag::StyleTime,
        // ##0.0E+0
        48 => TypeTag::StyleBignum,
        // @
        49 => TypeTag::StyleString,
        _ => return None,
    };
    Some(tag)
}

/// Tag implied by a custom number format code.
///
/// Any of `y m d h i s` outside a bracketed section (`[Red]`, `[$-409]`)
/// marks a date-time format.
pub fn custom_style_type(format_code: &str) -> TypeTag {
    static DATE_TIME: OnceLock<Regex> = OnceLock::new();

    if format_code.starts_with('_') || format_code.starts_with(" 0") {
        return TypeTag::StyleFloat;
    }
    let re = DATE_TIME.get_or_init(|| Regex::new(r"(?i)(^|\])[^\[]*[ymdhis]").unwrap());
    if re.is_match(format_code) {
        TypeTag::StyleDateTime
    } else {
        TypeTag::StyleUnsupported
    }
}

/// Number-format type lookup for a workbook's cell styles
#[derive(Debug, Clone, Default)]
pub struct StyleTypes {
    /// numFmtId of each cellXfs entry, by xf index
    xf_num_fmt_ids: Vec<u32>,
    /// Custom format codes by numFmtId
    custom_formats: HashMap<u32, String>,
    /// Classified custom formats by numFmtId
    custom_types: HashMap<u32, TypeTag>,
}

impl StyleTypes {
    /// Build from cellXfs number format ids and custom format codes
    pub fn new(xf_num_fmt_ids: Vec<u32>, custom_formats: HashMap<u32, String>) -> Self {
        let custom_types = custom_formats
            .iter()
            .map(|(&id, code)| (id, custom_style_type(code)))
            .collect();
        Self {
            xf_num_fmt_ids,
            custom_formats,
            custom_types,
        }
    }

    /// Read `numFmts` and `cellXfs` from the text of `xl/styles.xml`
    pub fn from_styles_xml(xml: &str) -> ConvertResult<Self> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut xf_num_fmt_ids = Vec::new();
        let mut custom_formats = HashMap::new();
        let mut in_num_fmts = false;
        let mut in_cell_xfs = false;

        loop {
            match reader.read_event()? {
                Event::Start(e) if e.local_name().as_ref() == b"numFmts" => {
                    in_num_fmts = true;
                }
                Event::End(e) if e.local_name().as_ref() == b"numFmts" => {
                    in_num_fmts = false;
                }
                Event::Start(e) if e.local_name().as_ref() == b"cellXfs" => {
                    in_cell_xfs = true;
                }
                Event::End(e) if e.local_name().as_ref() == b"cellXfs" => {
                    in_cell_xfs = false;
                }
                // numFmt inside dxfs belongs to conditional formatting only
                Event::Start(e) | Event::Empty(e) => match e.local_name().as_ref() {
                    b"numFmt" if in_num_fmts => {
                        let id = attr_value(&e, b"numFmtId").and_then(|v| v.parse().ok());
                        let code = attr_value(&e, b"formatCode");
                        if let (Some(id), Some(code)) = (id, code) {
                            custom_formats.insert(id, code);
                        }
                    }
                    b"xf" if in_cell_xfs => {
                        let id = attr_value(&e, b"numFmtId")
                            .and_then(|v| v.parse().ok())
                            .unwrap_or(0);
                        xf_num_fmt_ids.push(id);
                    }
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
        }

        log::debug!(
            "read {} cell styles, {} custom number formats",
            xf_num_fmt_ids.len(),
            custom_formats.len()
        );
        Ok(Self::new(xf_num_fmt_ids, custom_formats))
    }

    /// Number of cell styles
    pub fn len(&self) -> usize {
        self.xf_num_fmt_ids.len()
    }

    /// True when no cell styles were read
    pub fn is_empty(&self) -> bool {
        self.xf_num_fmt_ids.is_empty()
    }

    /// Custom format code for a numFmtId
    pub fn format_code(&self, num_fmt_id: u32) -> Option<&str> {
        self.custom_formats.get(&num_fmt_id).map(String::as_str)
    }

    /// Tag for a number format id
    pub fn num_fmt_type(&self, num_fmt_id: u32) -> Option<TypeTag> {
        if num_fmt_id >= FIRST_CUSTOM_FORMAT_ID {
            self.custom_types.get(&num_fmt_id).copied()
        } else {
            // Files may redefine built-in ids below 164
            self.custom_types
                .get(&num_fmt_id)
                .copied()
                .or_else(|| builtin_style_type(num_fmt_id))
        }
    }

    /// Tag for a cell's style index (the `s` attribute)
    pub fn style_type(&self, xf_index: u32) -> Option<TypeTag> {
        let num_fmt_id = *self.xf_num_fmt_ids.get(xf_index as usize)?;
        self.num_fmt_type(num_fmt_id)
    }
}

fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == key)
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.to_string()))
}
