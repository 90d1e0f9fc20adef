//! Monetary token detection for marker-less OCR lines.
//!
//! OCR frequently splits an amount from its `R$ ` marker, leaving a bare
//! `58,13` line. Wrapping such lines in a synthetic marker lets the layout
//! rules downstream locate the amount again.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parse a Brazilian-formatted decimal token and re-emit it normalized.
///
/// `.` is always treated as a thousands separator and stripped before the
/// parse, `,` as the decimal separator; `1.200` therefore reads as `1200`,
/// never as one-point-two. Normalization drops trailing zeros, so `12,50`
/// re-emits as `12,5`.
pub fn try_parse_decimal(text: &str) -> Option<String> {
    let cleaned = text.replace('.', "").replace(',', ".");
    let value = Decimal::from_str(cleaned.trim()).ok()?;
    Some(value.normalize().to_string().replace('.', ","))
}

/// Rewrite a bare decimal line into the synthetic marked form the layout
/// rules can locate (`58,13` becomes `***R$***58,13***`).
///
/// Returns `None` when the line is not a decimal token, leaving it untouched.
pub fn wrap_bare_decimal(line: &str) -> Option<String> {
    try_parse_decimal(line).map(|value| format!("***R$***{value}***"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_amount() {
        assert_eq!(try_parse_decimal("58,13"), Some("58,13".to_string()));
    }

    #[test]
    fn test_thousands_separator_stripped() {
        assert_eq!(try_parse_decimal("1.234,56"), Some("1234,56".to_string()));
    }

    #[test]
    fn test_dot_is_always_thousands() {
        // Documented misparse: a genuine decimal point reads as grouping.
        assert_eq!(try_parse_decimal("1.200"), Some("1200".to_string()));
    }

    #[test]
    fn test_trailing_zeros_dropped() {
        assert_eq!(try_parse_decimal("12,50"), Some("12,5".to_string()));
    }

    #[test]
    fn test_value_equality_after_reparse() {
        // 1.234,56 and the re-emitted token denote the same value.
        let normalized = try_parse_decimal("1.234,56").unwrap();
        let reparsed = Decimal::from_str(&normalized.replace(',', ".")).unwrap();
        assert_eq!(reparsed, Decimal::from_str("1234.56").unwrap());
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert_eq!(try_parse_decimal("IFOOD"), None);
        assert_eq!(try_parse_decimal("R$ 58,13"), None);
        assert_eq!(try_parse_decimal(""), None);
        assert_eq!(try_parse_decimal("12,3a"), None);
    }

    #[test]
    fn test_wrap_bare_decimal() {
        assert_eq!(
            wrap_bare_decimal("58,13"),
            Some("***R$***58,13***".to_string())
        );
        assert_eq!(wrap_bare_decimal("APP *MONTISTUDIO"), None);
    }
}
