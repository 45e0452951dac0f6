//! Conversion targets for a single cell

/// What a raw cell value should be converted to.
///
/// The first group comes from the cell's `t` attribute; the `Style*` group is
/// inferred from the number format of the cell's style (see
/// [`StyleTypes`](crate::StyleTypes)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `t="s"`: index into the shared string table
    SharedStringRef,
    /// `t="n"`: generic number
    Number,
    /// `t="b"`
    Boolean,
    /// `t="str"`: formula string result
    Str,
    /// `t="inlineStr"`
    InlineStr,
    /// Any other `t` code (`e`, `d`, ...); the raw value is kept
    Unrecognized,

    /// Text format (`@`)
    StyleString,
    /// Format with no dedicated conversion (General, currency, fractions)
    StyleUnsupported,
    /// Integer format (`0`)
    StyleFixnum,
    /// Decimal format (`0.00`)
    StyleFloat,
    /// Percent format; the stored value is scaled by 100
    StylePercentage,
    /// Date format
    StyleDate,
    /// Time format
    StyleTime,
    /// Date and time format
    StyleDateTime,
    /// Scientific format
    StyleBignum,
}

impl TypeTag {
    /// Every tag, in declaration order
    pub const ALL: [TypeTag; 15] = [
        TypeTag::SharedStringRef,
        TypeTag::Number,
        TypeTag::Boolean,
        TypeTag::Str,
        TypeTag::InlineStr,
        TypeTag::Unrecognized,
        TypeTag::StyleString,
        TypeTag::StyleUnsupported,
        TypeTag::StyleFixnum,
        TypeTag::StyleFloat,
        TypeTag::StylePercentage,
        TypeTag::StyleDate,
        TypeTag::StyleTime,
        TypeTag::StyleDateTime,
        TypeTag::StyleBignum,
    ];

    /// Map a cell `t` attribute to its tag
    pub fn from_type_code(code: &str) -> Self {
        match code {
            "s" => TypeTag::SharedStringRef,
            "n" => TypeTag::Number,
            "b" => TypeTag::Boolean,
            "str" => TypeTag::Str,
            "inlineStr" => TypeTag::InlineStr,
            _ => TypeTag::Unrecognized,
        }
    }

    /// Date, time or date-time style
    pub fn is_date_style(self) -> bool {
        matches!(
            self,
            TypeTag::StyleDate | TypeTag::StyleTime | TypeTag::StyleDateTime
        )
    }
}
