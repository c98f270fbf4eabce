//! Operand parsing and result formatting
//!
//! Operands live as strings while they are typed, so every calculation is a
//! parse, an IEEE-754 operation and a format. Parsing is lenient: it reads the
//! longest numeric prefix and yields NaN when there is none, so it never
//! fails. Formatting renders the shortest round-trip digits in plain notation
//! for `1e-6 <= |x| < 1e21` and in exponent notation for other non-zero values.

/// Largest decimal-point position rendered without exponent notation
const MAX_PLAIN_EXPONENT: i32 = 21;
/// Decimal-point positions must exceed this to avoid exponent notation
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Parses an operand string into a float.
///
/// Leading whitespace and a single sign are accepted, followed by either
/// `Infinity` or `digits[.digits][e[+-]digits]`. Trailing garbage is
/// ignored; a string without a numeric prefix parses as NaN.
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1.0, &trimmed[1..]),
        Some(b'+') => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };

    if rest.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    let len = numeric_prefix_len(rest.as_bytes());
    if len == 0 {
        return f64::NAN;
    }

    rest[..len]
        .parse::<f64>()
        .map_or(f64::NAN, |value| sign * value)
}

/// Length of the longest `digits[.digits][e[+-]digits]` prefix with at
/// least one mantissa digit, or 0.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let count_digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_digits = count_digits(0);
    let mut end = int_digits;
    let mut frac_digits = 0;

    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(end + 1);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_digits = count_digits(exp_start.min(bytes.len()));
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }

    end
}

/// Formats a calculation result for the display.
///
/// ```
/// use keypad_calculator::core::number::format_number;
///
/// assert_eq!(format_number(20.0), "20");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, exponent) = shortest_digits(value.abs());
    format!("{sign}{}", layout_digits(&digits, exponent))
}

/// Splits a positive finite value into its shortest round-trip significant
/// digits and the decimal exponent of the first digit.
fn shortest_digits(value: f64) -> (String, i32) {
    // `{:e}` emits the shortest representation that round-trips, e.g. "1.25e2"
    let sci = format!("{value:e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    (digits, exponent.parse().unwrap_or(0))
}

fn layout_digits(digits: &str, exponent: i32) -> String {
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit
    let n = exponent + 1;

    if k <= n && n <= MAX_PLAIN_EXPONENT {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if MIN_PLAIN_EXPONENT < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let exp_sign = if exponent >= 0 { '+' } else { '-' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{exp_sign}{}", exponent.abs())
        } else {
            format!("{lead}.{rest}e{exp_sign}{}", exponent.abs())
        }
    }
}
