//! Constructor-name scanning for `new <identifier> ( ... )`.
//!
//! Runs after the `new` keyword and its separating whitespace; stops once the
//! opening parenthesis is consumed. The argument list is ordinary value
//! grammar handled by the tokenizer with a Constructor frame on the stack.

use super::ScanStep;
use super::scan_string::is_identifier_start;
use crate::error::ErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CtorPhase {
    /// Whitespace between `new` and the name.
    LeadingWhitespace,
    Name,
    /// Whitespace between the name and `(`.
    TrailingWhitespace,
}

#[derive(Debug)]
pub(crate) struct ConstructorScanner {
    name: String,
    phase: CtorPhase,
}

impl ConstructorScanner {
    pub(crate) fn new() -> Self {
        Self {
            name: String::new(),
            phase: CtorPhase::LeadingWhitespace,
        }
    }

    pub(crate) fn finish(self) -> String {
        self.name
    }

    pub(crate) fn step(&mut self, c: char) -> Result<ScanStep, ErrorKind> {
        match self.phase {
            CtorPhase::LeadingWhitespace => {
                if c.is_whitespace() {
                    Ok(ScanStep::More)
                } else if is_identifier_start(c) {
                    self.name.push(c);
                    self.phase = CtorPhase::Name;
                    Ok(ScanStep::More)
                } else {
                    Err(ErrorKind::UnexpectedCharacterConstructor(c))
                }
            }
            CtorPhase::Name => {
                if c.is_alphanumeric() || matches!(c, '_' | '$') {
                    self.name.push(c);
                    Ok(ScanStep::More)
                } else if c == '(' {
                    Ok(ScanStep::Done)
                } else if c.is_whitespace() {
                    self.phase = CtorPhase::TrailingWhitespace;
                    Ok(ScanStep::More)
                } else {
                    Err(ErrorKind::UnexpectedCharacterConstructor(c))
                }
            }
            CtorPhase::TrailingWhitespace => {
                if c == '(' {
                    Ok(ScanStep::Done)
                } else if c.is_whitespace() {
                    Ok(ScanStep::More)
                } else {
                    Err(ErrorKind::UnexpectedCharacterConstructor(c))
                }
            }
        }
    }

    pub(crate) fn end_of_input_error(&self) -> ErrorKind {
        ErrorKind::UnexpectedEndConstructor
    }
}

#[cfg(test)]
mod tests {
    use super::{ConstructorScanner, ScanStep};
    use crate::error::ErrorKind;

    fn scan(input: &str) -> Result<String, ErrorKind> {
        let mut scanner = ConstructorScanner::new();
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
    fn simple_name() {
        assert_eq!(scan(" Date(").unwrap(), "Date");
    }

    #[test]
    fn whitespace_before_paren() {
        assert_eq!(scan("  Uri  (").unwrap(), "Uri");
    }

    #[test]
    fn bad_character_in_name() {
        assert_eq!(
            scan(" Da+e(").unwrap_err(),
            ErrorKind::UnexpectedCharacterConstructor('+')
        );
    }

    #[test]
    fn truncated() {
        assert_eq!(scan(" Date").unwrap_err(), ErrorKind::UnexpectedEndConstructor);
    }
}
