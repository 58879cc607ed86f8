//! String and property-name scanning.
//!
//! Handles single- and double-quoted strings, the short escape table,
//! `\uXXXX` escapes, surrogate pairing, and unquoted property names. Decoded
//! text accumulates in a scratch buffer, so strings spanning buffer refills
//! concatenate transparently. Invalid surrogate pairings substitute U+FFFD
//! for each invalid unit while still consuming the input.

use super::ScanStep;
use crate::error::ErrorKind;
use crate::escape::{
    UnicodeEscapeBuffer, combine_surrogates, decode_short_escape, is_high_surrogate,
    is_low_surrogate,
};

#[derive(Debug)]
enum StrPhase {
    /// Plain characters, up to the closing quote.
    Body,
    /// Just consumed a backslash.
    Escape,
    /// Inside `\uXXXX`.
    Unicode(UnicodeEscapeBuffer),
    /// A high surrogate is pending; expecting `\`.
    PairBackslash { high: u32 },
    /// A high surrogate is pending; consumed `\`, expecting `u`.
    PairU { high: u32 },
    /// A high surrogate is pending; inside the second `\uXXXX`.
    PairUnicode { high: u32, buf: UnicodeEscapeBuffer },
}

#[derive(Debug)]
pub(crate) struct StringScanner {
    quote: char,
    text: String,
    phase: StrPhase,
}

impl StringScanner {
    pub(crate) fn new(quote: char) -> Self {
        Self {
            quote,
            text: String::new(),
            phase: StrPhase::Body,
        }
    }

    pub(crate) fn finish(self) -> String {
        self.text
    }

    /// Feeds one consumed character.
    pub(crate) fn step(&mut self, c: char) -> Result<ScanStep, ErrorKind> {
        match &mut self.phase {
            StrPhase::Body => Ok(self.step_body(c)),
            StrPhase::Escape => self.step_escape(c),
            StrPhase::Unicode(buf) => match buf.feed(c)? {
                None => Ok(ScanStep::More),
                Some(unit) => {
                    self.accept_unit(unit);
                    Ok(ScanStep::More)
                }
            },
            StrPhase::PairBackslash { high } => {
                if c == '\\' {
                    self.phase = StrPhase::PairU { high: *high };
                    Ok(ScanStep::More)
                } else {
                    // Lone high surrogate followed by a plain character.
                    self.text.push(char::REPLACEMENT_CHARACTER);
                    Ok(self.step_body(c))
                }
            }
            StrPhase::PairU { high } => {
                if c == 'u' {
                    self.phase = StrPhase::PairUnicode {
                        high: *high,
                        buf: UnicodeEscapeBuffer::new(),
                    };
                    Ok(ScanStep::More)
                } else {
                    // Lone high surrogate followed by some other escape; the
                    // escape itself still decodes normally.
                    self.text.push(char::REPLACEMENT_CHARACTER);
                    self.step_escape(c)
                }
            }
            StrPhase::PairUnicode { high, buf } => {
                let high = *high;
                match buf.feed(c)? {
                    None => Ok(ScanStep::More),
                    Some(unit) => {
                        if is_low_surrogate(unit) {
                            self.text.push(combine_surrogates(high, unit));
                            self.phase = StrPhase::Body;
                        } else {
                            self.text.push(char::REPLACEMENT_CHARACTER);
                            self.accept_unit(unit);
                        }
                        Ok(ScanStep::More)
                    }
                }
            }
        }
    }

    fn step_body(&mut self, c: char) -> ScanStep {
        if c == self.quote {
            self.phase = StrPhase::Body;
            ScanStep::Done
        } else if c == '\\' {
            self.phase = StrPhase::Escape;
            ScanStep::More
        } else {
            self.text.push(c);
            self.phase = StrPhase::Body;
            ScanStep::More
        }
    }

    fn step_escape(&mut self, c: char) -> Result<ScanStep, ErrorKind> {
        if c == 'u' {
            self.phase = StrPhase::Unicode(UnicodeEscapeBuffer::new());
            return Ok(ScanStep::More);
        }
        match decode_short_escape(c) {
            Some(decoded) => {
                self.text.push(decoded);
                self.phase = StrPhase::Body;
                Ok(ScanStep::More)
            }
            None => Err(ErrorKind::BadEscapeSequence(c)),
        }
    }

    /// Routes a freshly decoded `\uXXXX` unit from a non-pairing position.
    fn accept_unit(&mut self, unit: u32) {
        if is_high_surrogate(unit) {
            self.phase = StrPhase::PairBackslash { high: unit };
        } else if is_low_surrogate(unit) {
            // Lone low surrogate.
            self.text.push(char::REPLACEMENT_CHARACTER);
            self.phase = StrPhase::Body;
        } else {
            // A four-digit escape outside the surrogate range is always a
            // valid scalar.
            self.text
                .push(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER));
            self.phase = StrPhase::Body;
        }
    }

    /// The fault to report when input ends inside this string.
    pub(crate) fn end_of_input_error(&self) -> ErrorKind {
        match self.phase {
            StrPhase::Unicode(_) | StrPhase::PairUnicode { .. } => {
                ErrorKind::UnexpectedEndUnicodeEscape
            }
            _ => ErrorKind::UnterminatedString(self.quote),
        }
    }
}

#[inline]
pub(crate) fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || matches!(c, '_' | '$')
}

#[inline]
fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '$')
}

/// Scans an unquoted property name. The name ends at `:` (consumed) or
/// whitespace (left for the separator scan); anything else is a fault.
#[derive(Debug)]
pub(crate) struct UnquotedNameScanner {
    text: String,
}

impl UnquotedNameScanner {
    pub(crate) fn new(first: char) -> Self {
        let mut text = String::new();
        text.push(first);
        Self { text }
    }

    pub(crate) fn finish(self) -> String {
        self.text
    }

    pub(crate) fn step(&mut self, c: char) -> Result<ScanStep, ErrorKind> {
        if is_identifier_char(c) {
            self.text.push(c);
            Ok(ScanStep::More)
        } else if c == ':' {
            Ok(ScanStep::Done)
        } else if c.is_whitespace() {
            Ok(ScanStep::DoneUnconsumed)
        } else {
            Err(ErrorKind::InvalidJavaScriptPropertyIdentifierCharacter(c))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ScanStep, StringScanner};
    use crate::error::ErrorKind;

    fn scan(input: &str) -> Result<String, ErrorKind> {
        let mut scanner = StringScanner::new('"');
        for c in input.chars() {
            match scanner.step(c)? {
                ScanStep::More => {}
                ScanStep::Done => return Ok(scanner.finish()),
                ScanStep::DoneUnconsumed => unreachable!(),
            }
        }
        Err(scanner.end_of_input_error())
    }

    #[test]
    fn short_escapes() {
        assert_eq!(scan(r#"a\n\t\"b\\c\/""#).unwrap(), "a\n\t\"b\\c/");
    }

    #[test]
    fn unicode_escape() {
        assert_eq!(scan(r#"\u00e9!""#).unwrap(), "é!");
    }

    #[test]
    fn surrogate_pair_combines() {
        assert_eq!(scan(r#"\ud83d\ude00""#).unwrap(), "😀");
    }

    #[test]
    fn lone_high_surrogate_is_replaced() {
        assert_eq!(scan(r#"\ud83dx""#).unwrap(), "\u{fffd}x");
    }

    #[test]
    fn lone_low_surrogate_is_replaced() {
        assert_eq!(scan(r#"\ude00ok""#).unwrap(), "\u{fffd}ok");
    }

    #[test]
    fn high_high_keeps_second_pending() {
        assert_eq!(
            scan(r#"\ud800\ud800\udc00""#).unwrap(),
            "\u{fffd}\u{10000}"
        );
    }

    #[test]
    fn high_then_short_escape() {
        assert_eq!(scan(r#"\ud800\n""#).unwrap(), "\u{fffd}\n");
    }

    #[test]
    fn invalid_unicode_escape_names_sequence() {
        assert_eq!(
            scan(r#"h\u123!'"#).unwrap_err(),
            ErrorKind::InvalidUnicodeEscape("123!".to_owned())
        );
    }

    #[test]
    fn unterminated() {
        assert_eq!(scan("abc").unwrap_err(), ErrorKind::UnterminatedString('"'));
    }

    #[test]
    fn end_inside_unicode_escape() {
        assert_eq!(
            scan(r"\u12").unwrap_err(),
            ErrorKind::UnexpectedEndUnicodeEscape
        );
    }
}
