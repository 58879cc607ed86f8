//! Keyword literal matching: `true`, `false`, `null`, `undefined`, `NaN`,
//! `Infinity`, `-Infinity`, and the `new` that opens constructor syntax.
//!
//! After the characters match, the literal must be followed by a value
//! terminator; `truex` is a fault, not a `true` token plus garbage.

use super::ScanStep;
use super::scan_number::is_value_terminator;
use crate::error::ErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LiteralKind {
    True,
    False,
    Null,
    Undefined,
    NaN,
    Infinity,
    NegativeInfinity,
    New,
}

impl LiteralKind {
    fn mismatch_error(self, c: char) -> ErrorKind {
        match self {
            Self::True | Self::False => ErrorKind::InvalidLiteral("boolean"),
            Self::Null => ErrorKind::InvalidLiteral("null"),
            Self::Undefined => ErrorKind::InvalidLiteral("undefined"),
            Self::NaN => ErrorKind::InvalidLiteral("NaN"),
            Self::Infinity | Self::NegativeInfinity => ErrorKind::InvalidLiteral("Infinity"),
            Self::New => ErrorKind::UnexpectedCharacterConstructor(c),
        }
    }

    fn end_error(self) -> ErrorKind {
        match self {
            Self::New => ErrorKind::UnexpectedEndConstructor,
            _ => ErrorKind::UnexpectedEnd,
        }
    }
}

#[derive(Debug)]
enum LiteralPhase {
    /// Seen `n`; the next character picks `null` or `new`.
    AfterN,
    Matching,
    /// Fully matched; verifying the next character is a terminator.
    Terminating,
}

#[derive(Debug)]
pub(crate) struct LiteralScanner {
    rest: &'static [u8],
    kind: LiteralKind,
    phase: LiteralPhase,
}

impl LiteralScanner {
    /// Starts matching after the first (already consumed) character.
    pub(crate) fn new(first: char) -> Option<Self> {
        let (rest, kind): (&'static [u8], _) = match first {
            't' => (b"rue", LiteralKind::True),
            'f' => (b"alse", LiteralKind::False),
            'u' => (b"ndefined", LiteralKind::Undefined),
            'N' => (b"aN", LiteralKind::NaN),
            'I' => (b"nfinity", LiteralKind::Infinity),
            'n' => {
                return Some(Self {
                    rest: b"",
                    kind: LiteralKind::Null,
                    phase: LiteralPhase::AfterN,
                });
            }
            _ => return None,
        };
        Some(Self {
            rest,
            kind,
            phase: LiteralPhase::Matching,
        })
    }

    /// Starts matching `-Infinity` after `-I` has been consumed.
    pub(crate) fn negative_infinity() -> Self {
        Self {
            rest: b"nfinity",
            kind: LiteralKind::NegativeInfinity,
            phase: LiteralPhase::Matching,
        }
    }

    pub(crate) fn kind(&self) -> LiteralKind {
        self.kind
    }

    pub(crate) fn step(&mut self, c: char) -> Result<ScanStep, ErrorKind> {
        match self.phase {
            LiteralPhase::AfterN => match c {
                'u' => {
                    self.rest = b"ll";
                    self.kind = LiteralKind::Null;
                    self.phase = LiteralPhase::Matching;
                    Ok(ScanStep::More)
                }
                'e' => {
                    self.rest = b"w";
                    self.kind = LiteralKind::New;
                    self.phase = LiteralPhase::Matching;
                    Ok(ScanStep::More)
                }
                other => Err(ErrorKind::UnexpectedCharacterValue(other)),
            },
            LiteralPhase::Matching => {
                let (expected, rest) = self
                    .rest
                    .split_first()
                    .expect("matching phase always has pending characters");
                if char::from(*expected) == c {
                    self.rest = rest;
                    if self.rest.is_empty() {
                        self.phase = LiteralPhase::Terminating;
                    }
                    Ok(ScanStep::More)
                } else {
                    Err(self.kind.mismatch_error(c))
                }
            }
            LiteralPhase::Terminating => {
                if is_value_terminator(c) {
                    Ok(ScanStep::DoneUnconsumed)
                } else {
                    Err(self.kind.mismatch_error(c))
                }
            }
        }
    }

    /// End of input is a legal terminator once the literal fully matched.
    /// `new` is the exception: its constructor must still follow.
    pub(crate) fn end_of_input(&self) -> Result<(), ErrorKind> {
        match self.phase {
            LiteralPhase::Terminating if self.kind != LiteralKind::New => Ok(()),
            _ => Err(self.kind.end_error()),
        }
    }
}
