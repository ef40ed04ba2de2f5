//! Operand text parsing, result rendering and display formatting.
//!
//! Operands live as text while they are typed. These functions are the only
//! place text turns into numbers and back.

/// Grouping separator used by [`format_number`].
pub const DEFAULT_GROUP_SEPARATOR: char = ',';

const INFINITY_TEXT: &str = "Infinity";
const NEG_INFINITY_TEXT: &str = "-Infinity";
const NAN_TEXT: &str = "NaN";
const INFINITY_DISPLAY: &str = "∞";
const NEG_INFINITY_DISPLAY: &str = "-∞";

/// Parse operand text into a number.
///
/// Returns `None` for empty text, a lone sign, anything non-numeric and
/// `NaN`. Infinite results produced by an earlier computation parse back
/// to infinities.
pub fn parse_operand(text: &str) -> Option<f64> {
    match text {
        INFINITY_TEXT => Some(f64::INFINITY),
        NEG_INFINITY_TEXT => Some(f64::NEG_INFINITY),
        _ => text.parse::<f64>().ok().filter(|value| value.is_finite()),
    }
}

/// Render a computed result as operand text.
///
/// Uses the shortest text that round-trips, never exponent notation.
/// Negative zero renders as `0`.
pub fn render_number(value: f64) -> String {
    if value.is_nan() {
        NAN_TEXT.to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            INFINITY_TEXT.to_string()
        } else {
            NEG_INFINITY_TEXT.to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Format a numeric string for display with `,` thousands grouping.
///
/// ```
/// use tally::core::format_number;
///
/// assert_eq!(format_number("1000"), "1,000");
/// assert_eq!(format_number("1234.56"), "1,234.56");
/// assert_eq!(format_number("0."), "0.");
/// assert_eq!(format_number(""), "");
/// ```
pub fn format_number(value: &str) -> String {
    format_number_with(value, DEFAULT_GROUP_SEPARATOR)
}

/// Format a numeric string with a caller-chosen grouping separator.
///
/// The text is split at the first `.`. The integer part is grouped by
/// thousands; the fractional part is reattached verbatim. Infinite results
/// render as `∞`; any other non-numeric integer part renders as nothing.
pub fn format_number_with(value: &str, separator: char) -> String {
    match value {
        "" => return String::new(),
        INFINITY_TEXT => return INFINITY_DISPLAY.to_string(),
        NEG_INFINITY_TEXT => return NEG_INFINITY_DISPLAY.to_string(),
        _ => {}
    }

    let (integer, fraction) = match value.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (value, None),
    };
    let integer_display = group_integer(integer, separator).unwrap_or_default();

    match fraction {
        Some(fraction) => format!("{integer_display}.{fraction}"),
        None => integer_display,
    }
}

fn group_integer(text: &str, separator: char) -> Option<String> {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let significant = digits.trim_start_matches('0');
    let digits = if significant.is_empty() { "0" } else { significant };

    let mut grouped = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    Some(grouped)
}
