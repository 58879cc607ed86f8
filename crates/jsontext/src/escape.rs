//! Escape and format tables shared by the string scanner and the writer.

use core::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::ErrorKind;

/// Decodes a single-character escape (`\n`, `\t`, ...). The inverse of the
/// table used by [`escape_into`].
#[inline]
pub(crate) fn decode_short_escape(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        '\'' => Some('\''),
        '\\' => Some('\\'),
        '/' => Some('/'),
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        _ => None,
    }
}

/// Writes `s` quoted with `quote`, escaping with the scanner's inverse table.
pub(crate) fn escape_into<W: fmt::Write>(w: &mut W, s: &str, quote: char) -> fmt::Result {
    w.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\\' => w.write_str("\\\\")?,
            '\u{8}' => w.write_str("\\b")?,
            '\u{c}' => w.write_str("\\f")?,
            '\n' => w.write_str("\\n")?,
            '\r' => w.write_str("\\r")?,
            '\t' => w.write_str("\\t")?,
            c if c == quote => {
                w.write_char('\\')?;
                w.write_char(quote)?;
            }
            // Remaining control characters, plus the line separators JSON
            // embedders cannot carry raw.
            c if c.is_control() || matches!(c, '\u{85}' | '\u{2028}' | '\u{2029}') => {
                write!(w, "\\u{:04x}", c as u32)?;
            }
            c => w.write_char(c)?,
        }
    }
    w.write_char(quote)
}

/// Accumulates the four characters of a `\uXXXX` escape and decodes them
/// together, so an invalid sequence reports all four characters as read.
///
/// Surrogate halves are returned as raw code units; pairing is the string
/// scanner's job.
#[derive(Debug)]
pub(crate) struct UnicodeEscapeBuffer {
    chars: [char; 4],
    len: usize,
}

impl UnicodeEscapeBuffer {
    pub(crate) fn new() -> Self {
        Self {
            chars: ['\0'; 4],
            len: 0,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.len = 0;
    }

    /// Feeds the next character after `\u`.
    ///
    /// Returns `Ok(None)` until four characters have arrived, then decodes:
    /// `Ok(Some(unit))` for a valid sequence, or
    /// [`ErrorKind::InvalidUnicodeEscape`] naming the exact text read.
    pub(crate) fn feed(&mut self, c: char) -> Result<Option<u32>, ErrorKind> {
        debug_assert!(self.len < 4);
        self.chars[self.len] = c;
        self.len += 1;
        if self.len < 4 {
            return Ok(None);
        }

        let mut unit: u32 = 0;
        for &digit in &self.chars {
            let Some(value) = digit.to_digit(16) else {
                let text: String = self.chars.iter().collect();
                self.reset();
                return Err(ErrorKind::InvalidUnicodeEscape(text));
            };
            unit = (unit << 4) | value;
        }
        self.reset();
        Ok(Some(unit))
    }
}

#[inline]
pub(crate) fn is_high_surrogate(unit: u32) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

#[inline]
pub(crate) fn is_low_surrogate(unit: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Combines a validated surrogate pair into one code point.
#[inline]
pub(crate) fn combine_surrogates(high: u32, low: u32) -> char {
    debug_assert!(is_high_surrogate(high) && is_low_surrogate(low));
    let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
    // A valid pair always lands in the supplementary planes.
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Renders a byte sequence as standard base64.
#[must_use]
pub(crate) fn to_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decodes standard base64 text.
pub(crate) fn from_base64(text: &str) -> Result<Vec<u8>, ErrorKind> {
    BASE64
        .decode(text)
        .map_err(|_| ErrorKind::InvalidBase64(text.to_owned()))
}
