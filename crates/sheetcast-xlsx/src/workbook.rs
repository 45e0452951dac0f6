//! Workbook metadata (workbook.xml) and date system resolution

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use sheetcast_core::DateSystem;

use crate::error::ConvertResult;

/// Workbook-level properties that affect value conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkbookProperties {
    /// Every `workbookPr/@date1904` value, in document order
    pub date1904: Vec<String>,
}

impl WorkbookProperties {
    /// Properties with a single `date1904` flag
    pub fn with_date1904<S: Into<String>>(value: S) -> Self {
        Self {
            date1904: vec![value.into()],
        }
    }

    /// Read properties from the text of `xl/workbook.xml`
    pub fn from_xml(xml: &str) -> ConvertResult<Self> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut props = Self::default();

        loop {
            match reader.read_event()? {
                Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"workbookPr" => {
                    for attr in e.attributes().flatten() {
                        if attr.key.local_name().as_ref() == b"date1904" {
                            props.date1904.push(attr.unescape_value()?.to_string());
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(props)
    }

    /// Whether any `date1904` flag is set
    pub fn uses_1904_dates(&self) -> bool {
        self.date1904.iter().any(|v| is_truthy_flag(v))
    }
}

/// Resolve the date system of a workbook.
///
/// Without metadata the 1900 system applies. A `date1904` flag containing
/// `true` or `1` (any case) selects the 1904 system.
pub fn resolve_date_system(props: Option<&WorkbookProperties>) -> DateSystem {
    match props {
        Some(p) if p.uses_1904_dates() => DateSystem::Excel1904,
        _ => DateSystem::Excel1900,
    }
}

fn is_truthy_flag(value: &str) -> bool {
    value.contains('1') || value.to_ascii_lowercase().contains("true")
}
