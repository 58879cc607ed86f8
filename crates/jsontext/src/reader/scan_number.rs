//! Numeric literal scanning and decoding.
//!
//! The scanner collects every character that could belong to a numeric
//! literal (hex digits double as exponent markers) and stops at a value
//! terminator; classification then decides between decimal integer, octal,
//! hexadecimal, and floating forms. Integer overflow never fails a plain
//! read: out-of-range literals promote losslessly to arbitrary precision.

use core::num::IntErrorKind;
use core::str::FromStr;

use num_bigint::BigInt;
use rust_decimal::Decimal;

use super::ScanStep;
use crate::error::ErrorKind;
use crate::options::FloatParseHandling;
use crate::token::JsonValue;

/// Characters that may appear inside a numeric literal. Hex digits cover the
/// exponent markers `e`/`E`.
#[inline]
fn is_number_char(c: char) -> bool {
    c.is_ascii_hexdigit() || matches!(c, 'x' | 'X' | '.' | '+' | '-')
}

/// Characters that legally end a value token.
#[inline]
pub(crate) fn is_value_terminator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ']' | '}' | ')' | '/' | ':')
}

#[derive(Debug)]
pub(crate) struct NumberScanner {
    text: String,
}

impl NumberScanner {
    pub(crate) fn new(first: char) -> Self {
        let mut text = String::new();
        text.push(first);
        Self { text }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn step(&mut self, c: char) -> Result<ScanStep, ErrorKind> {
        if is_number_char(c) {
            self.text.push(c);
            Ok(ScanStep::More)
        } else if is_value_terminator(c) {
            Ok(ScanStep::DoneUnconsumed)
        } else {
            Err(ErrorKind::UnexpectedCharacterNumber(c))
        }
    }

    pub(crate) fn finish(self) -> String {
        self.text
    }
}

/// Classifies and decodes a complete numeric literal.
pub(crate) fn decode_number(
    text: &str,
    handling: FloatParseHandling,
) -> Result<JsonValue, ErrorKind> {
    let invalid = || ErrorKind::InvalidNumber(text.to_owned());

    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if body.is_empty() {
        return Err(invalid());
    }

    if let Some(digits) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        return decode_radix(digits, 16, negative, invalid);
    }

    let mut chars = body.chars();
    let first = chars.next().ok_or_else(invalid)?;
    let second = chars.next();
    if first == '0' && second.is_some_and(|c| !matches!(c, '.' | 'e' | 'E')) {
        return decode_radix(body, 8, negative, invalid);
    }

    if body.bytes().all(|b| b.is_ascii_digit()) {
        return match text.parse::<i64>() {
            Ok(n) => Ok(JsonValue::Int(n)),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                BigInt::from_str(text)
                    .map(JsonValue::BigInt)
                    .map_err(|_| invalid())
            }
            Err(_) => Err(invalid()),
        };
    }

    match handling {
        FloatParseHandling::Double => text
            .parse::<f64>()
            .map(JsonValue::Float)
            .map_err(|_| invalid()),
        FloatParseHandling::FixedDecimal => {
            let parsed = if text.contains(['e', 'E']) {
                Decimal::from_scientific(text)
            } else {
                Decimal::from_str(text)
            };
            parsed.map(JsonValue::Decimal).map_err(|_| invalid())
        }
    }
}

fn decode_radix(
    digits: &str,
    radix: u32,
    negative: bool,
    invalid: impl Fn() -> ErrorKind,
) -> Result<JsonValue, ErrorKind> {
    if digits.is_empty() {
        return Err(invalid());
    }
    match i64::from_str_radix(digits, radix) {
        Ok(n) => Ok(JsonValue::Int(if negative { -n } else { n })),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow) => {
            let big = BigInt::parse_bytes(digits.as_bytes(), radix).ok_or_else(invalid)?;
            Ok(JsonValue::BigInt(if negative { -big } else { big }))
        }
        Err(_) => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use rstest::rstest;
    use rust_decimal::Decimal;

    use super::decode_number;
    use crate::error::ErrorKind;
    use crate::options::FloatParseHandling;
    use crate::token::JsonValue;

    #[rstest]
    #[case("0", 0)]
    #[case("-1", -1)]
    #[case("9223372036854775807", i64::MAX)]
    #[case("-9223372036854775808", i64::MIN)]
    #[case("0x2A", 42)]
    #[case("0X2a", 42)]
    #[case("-0x10", -16)]
    #[case("017", 15)]
    fn integers(#[case] text: &str, #[case] expected: i64) {
        assert_eq!(
            decode_number(text, FloatParseHandling::Double).unwrap(),
            JsonValue::Int(expected)
        );
    }

    #[test]
    fn int64_overflow_promotes_to_bigint() {
        let value = decode_number("9223372036854775808", FloatParseHandling::Double).unwrap();
        assert_eq!(
            value,
            JsonValue::BigInt("9223372036854775808".parse::<BigInt>().unwrap())
        );
    }

    #[test]
    fn hex_overflow_promotes_to_bigint() {
        let value = decode_number("0xFFFFFFFFFFFFFFFFFF", FloatParseHandling::Double).unwrap();
        assert_eq!(
            value,
            JsonValue::BigInt(BigInt::parse_bytes(b"FFFFFFFFFFFFFFFFFF", 16).unwrap())
        );
    }

    #[rstest]
    #[case("0e-10", 0.0)]
    #[case("0E-10", 0.0)]
    #[case("0.25e-5", 0.0000025)]
    #[case("0.3e10", 3_000_000_000.0)]
    #[case("6.0221418e23", 6.022_141_8e23)]
    fn floats(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(
            decode_number(text, FloatParseHandling::Double).unwrap(),
            JsonValue::Float(expected)
        );
    }

    #[test]
    fn fixed_decimal_mode() {
        let value = decode_number("0.25e-5", FloatParseHandling::FixedDecimal).unwrap();
        assert_eq!(
            value,
            JsonValue::Decimal("0.0000025".parse::<Decimal>().unwrap())
        );
    }

    #[rstest]
    #[case("09")]
    #[case("0a")]
    #[case("1.2.3")]
    #[case("1e")]
    #[case("-")]
    #[case("0x")]
    fn malformed(#[case] text: &str) {
        assert_eq!(
            decode_number(text, FloatParseHandling::Double).unwrap_err(),
            ErrorKind::InvalidNumber(text.to_owned())
        );
    }
}
