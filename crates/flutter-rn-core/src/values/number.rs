use flutter_rn_dart::PropertyValue;

use crate::style::StyleValue;

/// The first decimal number embedded in `text`.
///
/// `"24.0"` → 24, `"16px"` → 16, `"-8"` → -8. A minus sign counts only when
/// it directly precedes the digits. Literals beyond `f64` range give `None`.
pub fn parse_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let first_digit = bytes.iter().position(|b| b.is_ascii_digit())?;
    let start = if first_digit > 0 && bytes[first_digit - 1] == b'-' {
        first_digit - 1
    } else {
        first_digit
    };

    let mut end = first_digit;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    text[start..end]
        .trim_end_matches('.')
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Like [`parse_number`], but `0` when `text` holds no digits.
pub fn to_number(text: &str) -> f64 {
    parse_number(text).unwrap_or(0.0)
}

/// Numeric value of an argument written as a number literal.
///
/// Identifiers that merely contain digits (`spacing2`) do not count.
pub fn literal(value: &PropertyValue) -> Option<f64> {
    match value {
        PropertyValue::Number(text) => parse_number(text),
        _ => None,
    }
}

/// Style value for a size-like property: number literals become numbers,
/// anything else is passed through as text (`double.infinity`). So is a
/// literal too large to represent.
pub fn dimension(value: &PropertyValue) -> Option<StyleValue> {
    match value {
        PropertyValue::Number(text) => Some(
            parse_number(text).map_or_else(|| StyleValue::from(text.as_str()), StyleValue::Number),
        ),
        other => other.as_text().map(StyleValue::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_decimal() {
        assert_eq!(parse_number("200.0"), Some(200.0));
        assert_eq!(parse_number("16"), Some(16.0));
    }

    #[test]
    fn suffix_is_ignored() {
        assert_eq!(parse_number("16px"), Some(16.0));
        assert_eq!(parse_number("12."), Some(12.0));
    }

    #[test]
    fn first_number_wins() {
        assert_eq!(parse_number("w 8.5 and 9"), Some(8.5));
    }

    #[test]
    fn negative_kept() {
        assert_eq!(parse_number("-8.0"), Some(-8.0));
        assert_eq!(parse_number("a-b 3"), Some(3.0));
    }

    #[test]
    fn no_digits() {
        assert_eq!(parse_number("double.infinity"), None);
        assert_eq!(to_number("double.infinity"), 0.0);
    }

    #[test]
    fn overflowing_literal_is_not_a_number() {
        let huge = format!("1{}", "0".repeat(400));
        assert_eq!(parse_number(&huge), None);
        assert_eq!(to_number(&huge), 0.0);
        assert_eq!(dimension(&PropertyValue::Number(huge.clone())), Some(StyleValue::from(huge.as_str())));
    }

    #[test]
    fn literal_requires_number_value() {
        assert_eq!(literal(&PropertyValue::Number("4.0".into())), Some(4.0));
        assert_eq!(literal(&PropertyValue::RawText("spacing2".into())), None);
    }

    #[test]
    fn dimension_passes_through_text() {
        assert_eq!(
            dimension(&PropertyValue::EnumReference("double.infinity".into())),
            Some(StyleValue::from("double.infinity"))
        );
        assert_eq!(dimension(&PropertyValue::Number("100.0".into())), Some(StyleValue::Number(100.0)));
        assert_eq!(dimension(&PropertyValue::WidgetList(Vec::new())), None);
    }
}
