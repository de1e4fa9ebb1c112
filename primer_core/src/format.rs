//! # Console Formatting
//!
//! Fixed-width helpers shared by the program renderers. They reproduce the
//! layout rules of a classic formatted-stream console: right-aligned fields
//! that grow instead of truncating, fixed-point numbers, the default
//! six-significant-digit float rendering, and zero-padded clock times.

/// Significant digits used by [`general`]
const GENERAL_DIGITS: i32 = 6;

/// Right-align `text` in a field of `width` characters.
///
/// Text longer than the field is printed in full.
pub fn right(text: impl std::fmt::Display, width: usize) -> String {
    format!("{:>width$}", text.to_string(), width = width)
}

/// Render `value` in fixed-point notation with `precision` decimals.
pub fn fixed(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Render `value` the way a default-configured output stream does:
/// at most six significant digits, trailing zeros removed, and
/// scientific notation for very large or very small magnitudes.
///
/// ```rust
/// use primer_core::format::general;
///
/// assert_eq!(general(5.0), "5");
/// assert_eq!(general(40f64.sqrt()), "6.32456");
/// assert_eq!(general(0.5), "0.5");
/// ```
pub fn general(value: f64) -> String {
    if value == 0.0 {
        // -0 prints as "-0" on a stream as well
        return if value.is_sign_negative() { "-0".to_string() } else { "0".to_string() };
    }
    if !value.is_finite() {
        return if value.is_nan() {
            "nan".to_string()
        } else if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }

    // Exponent after rounding to the requested significant digits
    let sci = format!("{:.*e}", (GENERAL_DIGITS - 1) as usize, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= GENERAL_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (GENERAL_DIGITS - 1 - exponent).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Render a 24-hour clock as `HH:MM`.
///
/// Values are padded to two digits but never clipped, so an
/// out-of-range hour such as 123 prints as `123`.
pub fn clock(hour: i32, minute: i32) -> String {
    format!("{:02}:{:02}", hour, minute)
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_pads_and_grows() {
        assert_eq!(right('a', 2), " a");
        assert_eq!(right(12, 2), "12");
        assert_eq!(right(123, 2), "123");
        assert_eq!(right("x^1/", 6), "  x^1/");
    }

    #[test]
    fn test_fixed() {
        assert_eq!(fixed(2.0f64.sqrt(), 3), "1.414");
        assert_eq!(fixed(10.0, 0), "10");
    }

    #[test]
    fn test_general_integers_and_fractions() {
        assert_eq!(general(12.0), "12");
        assert_eq!(general(-3.25), "-3.25");
        assert_eq!(general(1.0 / 3.0), "0.333333");
        assert_eq!(general(123456.0), "123456");
    }

    #[test]
    fn test_general_rounding() {
        assert_eq!(general(40f64.sqrt()), "6.32456");
        assert_eq!(general(2.0f64.sqrt() * 1000.0), "1414.21");
    }

    #[test]
    fn test_general_scientific() {
        assert_eq!(general(1234567.0), "1.23457e+06");
        assert_eq!(general(0.00001234), "1.234e-05");
        assert_eq!(general(1.0e6), "1e+06");
        assert_eq!(general(0.0001), "0.0001");
    }

    #[test]
    fn test_clock_padding() {
        assert_eq!(clock(8, 5), "08:05");
        assert_eq!(clock(23, 59), "23:59");
        assert_eq!(clock(0, 0), "00:00");
    }
}
