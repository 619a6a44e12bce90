/// Characters that may appear in a decimal literal.
const DECIMAL_CHARS: &str = "0123456789.eE+-";

/// Parses `text` as a decimal number if, and only if, the whole (trimmed)
/// text is one.
///
/// Only plain decimal notation is accepted: an optional sign, digits, an
/// optional fraction and an optional exponent. Words such as `inf` or `NaN`
/// are not numbers here, so a variable may be called `nan`. Literals that
/// overflow to infinity, such as `1e400`, are rejected as well.
///
/// ## Parameters
/// - `text`: The candidate literal.
///
/// ## Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the text is empty or not entirely a decimal number.
///
/// ## Example
/// ```
/// use ebpl::util::num::parse_decimal;
///
/// assert_eq!(parse_decimal("10"), Some(10.0));
/// assert_eq!(parse_decimal(" -2.5 "), Some(-2.5));
/// assert_eq!(parse_decimal("1e3"), Some(1000.0));
/// assert_eq!(parse_decimal("10abc"), None);
/// assert_eq!(parse_decimal("inf"), None);
/// assert_eq!(parse_decimal("1e400"), None);
/// assert_eq!(parse_decimal(""), None);
/// ```
#[must_use]
pub fn parse_decimal(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() || !text.chars().all(|c| DECIMAL_CHARS.contains(c)) {
        return None;
    }
    text.parse().ok().filter(|value: &f64| value.is_finite())
}

/// Returns `true` if [`parse_decimal`] would accept `text`.
#[must_use]
pub fn is_decimal(text: &str) -> bool {
    parse_decimal(text).is_some()
}

/// Renders a number the way the emitted script writes it.
///
/// Integral values carry no fractional part (`10`, not `10.0`) and negative
/// zero is written as `0`.
///
/// ## Example
/// ```
/// use ebpl::util::num::format_number;
///
/// assert_eq!(format_number(15.0), "15");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(-0.0), "0");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
